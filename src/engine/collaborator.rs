//! The callback interface a strategy implements.

use std::time::Duration;

use crate::error::EngineError;
use crate::map::{RegionIdx, SuperRegionIdx};

use super::session::Session;

/// Decision-making side of the bot.
///
/// The engine calls these as protocol messages arrive. `per_*` callbacks fire
/// once per record of a message, the matching `on_*` callback once after the
/// last record. Everything except the two in-game decisions defaults to doing
/// nothing.
///
/// Decision callbacks answer by queueing responses on the [`Session`]; the
/// engine writes the queue out as soon as the callback returns.
pub trait Collaborator {
    /// A super region and its reward were declared.
    fn per_setup_super_region(
        &mut self,
        _session: &mut Session,
        _super_region: SuperRegionIdx,
        _reward: u32,
    ) {
    }

    /// Every super region of a `setup_map super_regions` message is declared.
    fn on_setup_super_regions(&mut self, _session: &mut Session) {}

    /// A region was declared and joined `super_region`.
    fn per_setup_region(
        &mut self,
        _session: &mut Session,
        _super_region: SuperRegionIdx,
        _region: RegionIdx,
    ) {
    }

    /// Every region of a `setup_map regions` message is declared.
    fn on_setup_regions(&mut self, _session: &mut Session) {}

    /// `region` and `neighbour` are linked. Called once per declared pair,
    /// including pairs declared before.
    fn per_setup_neighbour(
        &mut self,
        _session: &mut Session,
        _region: RegionIdx,
        _neighbour: RegionIdx,
    ) {
    }

    /// Every pair of a `setup_map neighbors` message is linked.
    fn on_setup_neighbours(&mut self, _session: &mut Session) {}

    /// The server told us our own name.
    fn on_setting_me(&mut self, _session: &mut Session, _name: &str) {}

    /// The server told us the opponent's name.
    fn on_setting_opponent(&mut self, _session: &mut Session, _name: &str) {}

    /// Armies available for placement this round.
    fn on_setting_starting_armies(&mut self, _session: &mut Session, _armies: u32) {}

    /// A visible region changed. Its owner and army count have already been
    /// overwritten.
    fn per_update_map(&mut self, _session: &mut Session, _region: RegionIdx) {}

    /// Every region of an `update_map` message is written.
    fn on_update_map(&mut self, _session: &mut Session) {}

    /// The opponent placed `armies` on `region`. The engine leaves the
    /// region's army count untouched.
    fn per_opponent_place_armies(
        &mut self,
        _session: &mut Session,
        _region: RegionIdx,
        _armies: u32,
    ) {
    }

    /// All visible opponent placements of the round are reported.
    fn on_opponent_place_armies(&mut self, _session: &mut Session) {}

    /// The opponent attacked or transferred `armies` at `region`. The engine
    /// leaves the region's army count untouched.
    fn per_opponent_attack_or_transfer(
        &mut self,
        _session: &mut Session,
        _region: RegionIdx,
        _armies: u32,
    ) {
    }

    /// All visible opponent attacks and transfers of the round are reported.
    fn on_opponent_attack_or_transfer(&mut self, _session: &mut Session) {}

    /// Choose starting regions among `candidates`.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the engine.
    fn on_pick_starting_regions(
        &mut self,
        _session: &mut Session,
        _time: Duration,
        _candidates: &[RegionIdx],
    ) -> Result<(), EngineError> {
        Ok(())
    }

    /// Place this round's armies.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the engine.
    fn on_go_place_armies(&mut self, session: &mut Session, time: Duration)
        -> Result<(), EngineError>;

    /// Attack or move armies between regions.
    ///
    /// # Errors
    ///
    /// Any error is fatal to the engine.
    fn on_go_attack_or_transfer(
        &mut self,
        session: &mut Session,
        time: Duration,
    ) -> Result<(), EngineError>;
}
