//! Engine tests.
//!
//! - `setup.rs` - map declaration messages and settings
//! - `updates.rs` - `update_map` and `opponent_moves`
//! - `turns.rs` - turn triggers, response flushing and the message loop
//! - `proptest.rs` - property-based tests over generated maps


use std::time::Duration;

use crate::engine::{Collaborator, Engine, Session};
use crate::error::EngineError;
use crate::map::{RegionIdx, SuperRegionIdx};

/// What a [`Recorder`] does when asked for a decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) enum Decision {
    /// Queue nothing.
    #[default]
    Pass,
    /// Put every starting army on the first owned region and attack from it
    /// into its first neighbour with everything but one army.
    Act,
    /// Fail the callback.
    Fail,
}

/// Collaborator recording every callback as a readable line.
#[derive(Debug, Default)]
pub(super) struct Recorder {
    pub events: Vec<String>,
    pub decision: Decision,
}

impl Recorder {
    pub fn acting() -> Self {
        Recorder {
            events: Vec::new(),
            decision: Decision::Act,
        }
    }

    fn decide(&self) -> Result<(), EngineError> {
        match self.decision {
            Decision::Fail => Err(EngineError::MissingSetting { setting: "strategy" }),
            _ => Ok(()),
        }
    }
}

fn id(session: &Session, region: RegionIdx) -> String {
    session.map().region(region).id().to_string()
}

fn super_id(session: &Session, super_region: SuperRegionIdx) -> String {
    session.map().super_region(super_region).id().to_string()
}

impl Collaborator for Recorder {
    fn per_setup_super_region(
        &mut self,
        session: &mut Session,
        super_region: SuperRegionIdx,
        reward: u32,
    ) {
        self.events
            .push(format!("super_region {} {reward}", super_id(session, super_region)));
    }

    fn on_setup_super_regions(&mut self, _session: &mut Session) {
        self.events.push("super_regions done".to_string());
    }

    fn per_setup_region(
        &mut self,
        session: &mut Session,
        super_region: SuperRegionIdx,
        region: RegionIdx,
    ) {
        self.events.push(format!(
            "region {} in {}",
            id(session, region),
            super_id(session, super_region)
        ));
    }

    fn on_setup_regions(&mut self, _session: &mut Session) {
        self.events.push("regions done".to_string());
    }

    fn per_setup_neighbour(&mut self, session: &mut Session, region: RegionIdx, neighbour: RegionIdx) {
        self.events.push(format!(
            "neighbour {} {}",
            id(session, region),
            id(session, neighbour)
        ));
    }

    fn on_setup_neighbours(&mut self, _session: &mut Session) {
        self.events.push("neighbours done".to_string());
    }

    fn on_setting_me(&mut self, _session: &mut Session, name: &str) {
        self.events.push(format!("me {name}"));
    }

    fn on_setting_opponent(&mut self, _session: &mut Session, name: &str) {
        self.events.push(format!("opponent {name}"));
    }

    fn on_setting_starting_armies(&mut self, _session: &mut Session, armies: u32) {
        self.events.push(format!("starting_armies {armies}"));
    }

    fn per_update_map(&mut self, session: &mut Session, region: RegionIdx) {
        let r = session.map().region(region);
        self.events
            .push(format!("update {} {} {}", r.id(), r.owner, r.armies));
    }

    fn on_update_map(&mut self, _session: &mut Session) {
        self.events.push("update done".to_string());
    }

    fn per_opponent_place_armies(&mut self, session: &mut Session, region: RegionIdx, armies: u32) {
        self.events
            .push(format!("opponent placed {armies} on {}", id(session, region)));
    }

    fn on_opponent_place_armies(&mut self, _session: &mut Session) {
        self.events.push("placements done".to_string());
    }

    fn per_opponent_attack_or_transfer(
        &mut self,
        session: &mut Session,
        region: RegionIdx,
        armies: u32,
    ) {
        self.events
            .push(format!("opponent moved {armies} at {}", id(session, region)));
    }

    fn on_opponent_attack_or_transfer(&mut self, _session: &mut Session) {
        self.events.push("attacks done".to_string());
    }

    fn on_pick_starting_regions(
        &mut self,
        session: &mut Session,
        time: Duration,
        candidates: &[RegionIdx],
    ) -> Result<(), EngineError> {
        let ids: Vec<String> = candidates.iter().map(|&r| id(session, r)).collect();
        self.events
            .push(format!("pick {} from {}", time.as_millis(), ids.join(" ")));
        if self.decision == Decision::Act {
            session.select_starting_regions(&candidates[..candidates.len().min(2)]);
        }
        self.decide()
    }

    fn on_go_place_armies(&mut self, session: &mut Session, time: Duration) -> Result<(), EngineError> {
        self.events.push(format!("place {}", time.as_millis()));
        if self.decision == Decision::Act {
            let me = session.me().unwrap_or_default().to_string();
            let first = session.map().owned_by(&me).next();
            if let Some(region) = first {
                let armies = session.starting_armies();
                session.place_armies(region, armies)?;
            }
        }
        self.decide()
    }

    fn on_go_attack_or_transfer(
        &mut self,
        session: &mut Session,
        time: Duration,
    ) -> Result<(), EngineError> {
        self.events.push(format!("attack {}", time.as_millis()));
        if self.decision == Decision::Act {
            let me = session.me().unwrap_or_default().to_string();
            let first = session.map().owned_by(&me).next();
            if let Some(source) = first {
                let region = session.map().region(source);
                if let Some(&target) = region.neighbours().first() {
                    let armies = region.armies.saturating_sub(1);
                    session.attack_or_transfer(source, target, armies)?;
                }
            }
        }
        self.decide()
    }
}

/// Feed `lines` through `engine`, returning everything written to the output.
pub(super) fn feed<C: Collaborator, S: AsRef<str>>(
    engine: &mut Engine<C>,
    lines: &[S],
) -> Result<String, EngineError> {
    let mut out = Vec::new();
    for line in lines {
        engine.handle_line(line.as_ref(), &mut out)?;
    }
    Ok(String::from_utf8(out).expect("engine output is UTF-8"))
}

/// Engine with two super regions, three regions and a line of neighbours
/// `10 - 11 - 12`.
pub(super) fn small_map(recorder: Recorder) -> Engine<Recorder> {
    let mut engine = Engine::new(recorder);
    feed(
        &mut engine,
        &[
            "settings your_bot player1",
            "settings opponent_bot player2",
            "setup_map super_regions 1 5 2 3",
            "setup_map regions 10 1 11 1 12 2",
            "setup_map neighbors 10 11 11 12",
        ],
    )
    .expect("small map setup");
    engine.collaborator_mut().events.clear();
    engine
}

pub(super) fn region(engine: &Engine<Recorder>, id: &str) -> RegionIdx {
    engine
        .session()
        .map()
        .find_region(id)
        .unwrap_or_else(|| panic!("region {id} missing"))
}
