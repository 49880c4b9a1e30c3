//! Handlers for each protocol message kind.

use std::io::Write;
use std::time::Duration;

use tracing::debug;

use crate::error::{parse_number, EngineError};
use crate::protocol::Item;
use crate::response::PLACE_ARMIES;

use super::collaborator::Collaborator;
use super::Engine;

/// Split an item into exactly `N` fields.
fn fields<'a, const N: usize>(
    item: &Item<'a>,
    message: &'static str,
) -> Result<[&'a str; N], EngineError> {
    item.split::<N>().ok_or(EngineError::MissingField {
        message,
        field: "record fields",
    })
}

fn parse_time(value: &str) -> Result<Duration, EngineError> {
    parse_number::<u64>("time budget", value).map(Duration::from_millis)
}

impl<C: Collaborator> Engine<C> {
    pub(super) fn setup_super_regions(&mut self, items: &[Item<'_>]) -> Result<(), EngineError> {
        for item in items {
            let [id, reward] = fields::<2>(item, "setup_map super_regions")?;
            let reward = parse_number("super region reward", reward)?;
            let idx = self.session.map_mut().add_super_region(id, reward)?;
            self.collaborator
                .per_setup_super_region(&mut self.session, idx, reward);
        }
        self.collaborator.on_setup_super_regions(&mut self.session);
        debug!(
            "{} super regions declared",
            self.session.map().super_region_count()
        );
        Ok(())
    }

    pub(super) fn setup_regions(&mut self, items: &[Item<'_>]) -> Result<(), EngineError> {
        for item in items {
            let [id, super_region_id] = fields::<2>(item, "setup_map regions")?;
            let map = self.session.map_mut();
            let super_region = map.resolve_super_region(super_region_id)?;
            let region = map.add_region(id, super_region)?;
            self.collaborator
                .per_setup_region(&mut self.session, super_region, region);
        }
        self.collaborator.on_setup_regions(&mut self.session);
        debug!("{} regions declared", self.session.map().region_count());
        Ok(())
    }

    pub(super) fn setup_neighbours(&mut self, items: &[Item<'_>]) -> Result<(), EngineError> {
        for item in items {
            let [id, neighbour_ids] = fields::<2>(item, "setup_map neighbors")?;
            let region = self.session.map().resolve_region(id)?;
            for neighbour_id in neighbour_ids.split(',').filter(|n| !n.is_empty()) {
                let map = self.session.map_mut();
                let neighbour = map.resolve_region(neighbour_id)?;
                map.link(region, neighbour);
                self.collaborator
                    .per_setup_neighbour(&mut self.session, region, neighbour);
            }
        }
        self.collaborator.on_setup_neighbours(&mut self.session);
        Ok(())
    }

    pub(super) fn settings_your_bot(&mut self, name: &str) {
        self.session.settings_mut().me = Some(name.to_string());
        self.collaborator.on_setting_me(&mut self.session, name);
    }

    pub(super) fn settings_opponent_bot(&mut self, name: &str) {
        self.session.settings_mut().opponent = Some(name.to_string());
        self.collaborator.on_setting_opponent(&mut self.session, name);
    }

    pub(super) fn settings_starting_armies(&mut self, armies: &str) -> Result<(), EngineError> {
        let armies = parse_number("starting armies", armies)?;
        self.session.settings_mut().starting_armies = armies;
        self.collaborator
            .on_setting_starting_armies(&mut self.session, armies);
        Ok(())
    }

    pub(super) fn update_map(&mut self, items: &[Item<'_>]) -> Result<(), EngineError> {
        for item in items {
            let [id, owner, armies] = fields::<3>(item, "update_map")?;
            let armies = parse_number("region armies", armies)?;
            let map = self.session.map_mut();
            let region = map.resolve_region(id)?;
            map.update(region, owner, armies);
            self.collaborator.per_update_map(&mut self.session, region);
        }
        self.collaborator.on_update_map(&mut self.session);
        Ok(())
    }

    pub(super) fn opponent_moves(&mut self, items: &[Item<'_>]) -> Result<(), EngineError> {
        let mut placements = Vec::new();
        let mut attacks = Vec::new();
        for item in items {
            let [_, verb, id, armies] = fields::<4>(item, "opponent_moves")?;
            if verb.eq_ignore_ascii_case(PLACE_ARMIES) {
                placements.push((id, armies));
            } else {
                attacks.push((id, armies));
            }
        }

        for (id, armies) in placements {
            let region = self.session.map().resolve_region(id)?;
            let armies = parse_number("placed armies", armies)?;
            self.collaborator
                .per_opponent_place_armies(&mut self.session, region, armies);
        }
        self.collaborator.on_opponent_place_armies(&mut self.session);

        for (id, armies) in attacks {
            let region = self.session.map().resolve_region(id)?;
            let armies = parse_number("moved armies", armies)?;
            self.collaborator
                .per_opponent_attack_or_transfer(&mut self.session, region, armies);
        }
        self.collaborator
            .on_opponent_attack_or_transfer(&mut self.session);
        Ok(())
    }

    pub(super) fn pick_starting_regions<W: Write>(
        &mut self,
        items: &[Item<'_>],
        out: &mut W,
    ) -> Result<(), EngineError> {
        let (time, candidates) = items.split_first().ok_or(EngineError::MissingField {
            message: "pick_starting_regions",
            field: "time budget",
        })?;
        let [time] = fields::<1>(time, "pick_starting_regions")?;
        let time = parse_time(time)?;
        let candidates = candidates
            .iter()
            .map(|item| {
                let [id] = fields::<1>(item, "pick_starting_regions")?;
                self.session.map().resolve_region(id)
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.collaborator
            .on_pick_starting_regions(&mut self.session, time, &candidates)?;
        self.respond(out)
    }

    pub(super) fn go_place_armies<W: Write>(
        &mut self,
        time: &str,
        out: &mut W,
    ) -> Result<(), EngineError> {
        let time = parse_time(time)?;
        self.collaborator
            .on_go_place_armies(&mut self.session, time)?;
        self.respond(out)
    }

    pub(super) fn go_attack_or_transfer<W: Write>(
        &mut self,
        time: &str,
        out: &mut W,
    ) -> Result<(), EngineError> {
        let time = parse_time(time)?;
        self.collaborator
            .on_go_attack_or_transfer(&mut self.session, time)?;
        self.respond(out)
    }
}
