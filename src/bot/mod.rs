//! A minimal random strategy, used by the bundled binary.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::engine::{Collaborator, Session};
use crate::error::EngineError;
use crate::map::RegionIdx;


/// Number of starting regions the server expects us to pick.
pub const STARTING_PICKS: usize = 6;

/// Plays legal-looking but aimless moves.
///
/// Armies are spread one at a time over random owned regions, and every
/// owned region with spare armies attacks a random foreign neighbour.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    /// Create a bot; `None` seeds from system entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomBot { rng }
    }

    fn owned_regions(session: &Session) -> Result<Vec<RegionIdx>, EngineError> {
        let me = session
            .me()
            .ok_or(EngineError::MissingSetting { setting: "your_bot" })?;
        Ok(session.map().owned_by(me).collect())
    }
}

impl Collaborator for RandomBot {
    fn on_pick_starting_regions(
        &mut self,
        session: &mut Session,
        _time: Duration,
        candidates: &[RegionIdx],
    ) -> Result<(), EngineError> {
        let picks: Vec<RegionIdx> = candidates
            .choose_multiple(&mut self.rng, STARTING_PICKS.min(candidates.len()))
            .copied()
            .collect();
        if !picks.is_empty() {
            session.select_starting_regions(&picks);
        }
        Ok(())
    }

    fn on_go_place_armies(&mut self, session: &mut Session, _time: Duration) -> Result<(), EngineError> {
        let owned = Self::owned_regions(session)?;
        if owned.is_empty() {
            return Ok(());
        }

        let mut placements: BTreeMap<RegionIdx, u32> = BTreeMap::new();
        for _ in 0..session.starting_armies() {
            let region = owned[self.rng.gen_range(0..owned.len())];
            *placements.entry(region).or_default() += 1;
        }
        debug!("placing armies on {} regions", placements.len());

        for (region, armies) in placements {
            session.place_armies(region, armies)?;
        }
        Ok(())
    }

    fn on_go_attack_or_transfer(
        &mut self,
        session: &mut Session,
        _time: Duration,
    ) -> Result<(), EngineError> {
        let owned = Self::owned_regions(session)?;
        let mut moves = Vec::new();
        for source in owned {
            let region = session.map().region(source);
            if region.armies <= 1 {
                continue;
            }
            let targets: Vec<RegionIdx> = region
                .neighbours()
                .iter()
                .copied()
                .filter(|&n| session.map().region(n).owner != region.owner)
                .collect();
            if let Some(&target) = targets.choose(&mut self.rng) {
                moves.push((source, target, region.armies - 1));
            }
        }
        debug!("attacking with {} regions", moves.len());

        for (source, target, armies) in moves {
            session.attack_or_transfer(source, target, armies)?;
        }
        Ok(())
    }
}
