//! Per-game state handed to the collaborator on every callback.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::map::{RegionIdx, WorldMap};
use crate::response::{
    format_attack_or_transfer, format_placement, format_starting_regions, Responses,
};

/// Values sent with `settings` messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Our own bot name, once `settings your_bot` arrives.
    pub me: Option<String>,
    /// The opponent's bot name, once `settings opponent_bot` arrives.
    pub opponent: Option<String>,
    /// Armies available for placement this round.
    pub starting_armies: u32,
}

/// Map, settings and response queue of the running game.
#[derive(Debug)]
pub struct Session {
    map: WorldMap,
    settings: Settings,
    responses: Responses,
    config: EngineConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Session {
            map: WorldMap::new(config.neutral_owner.clone()),
            settings: Settings::default(),
            responses: Responses::new(),
            config,
        }
    }

    #[must_use]
    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut WorldMap {
        &mut self.map
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn me(&self) -> Option<&str> {
        self.settings.me.as_deref()
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&str> {
        self.settings.opponent.as_deref()
    }

    #[must_use]
    pub fn starting_armies(&self) -> u32 {
        self.settings.starting_armies
    }

    #[must_use]
    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// Queue a preformatted response token.
    pub fn push_response(&mut self, token: impl Into<String>) {
        self.responses.push(token);
    }

    /// Replace the queue with the no-op token.
    pub fn no_moves(&mut self) {
        self.responses.replace(self.config.no_moves.clone());
    }

    /// Replace the queue with a starting region pick.
    pub fn select_starting_regions(&mut self, regions: &[RegionIdx]) {
        let line = format_starting_regions(regions.iter().map(|&r| self.map.region(r).id()));
        self.responses.replace(line);
    }

    /// Queue an army placement by this bot.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::MissingSetting`] before `settings your_bot`.
    pub fn place_armies(&mut self, region: RegionIdx, armies: u32) -> Result<(), EngineError> {
        let me = self.require_me()?;
        let token = format_placement(me, self.map.region(region).id(), armies);
        self.responses.push(token);
        Ok(())
    }

    /// Queue an attack or transfer by this bot.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::MissingSetting`] before `settings your_bot`.
    pub fn attack_or_transfer(
        &mut self,
        source: RegionIdx,
        target: RegionIdx,
        armies: u32,
    ) -> Result<(), EngineError> {
        let me = self.require_me()?;
        let token = format_attack_or_transfer(
            me,
            self.map.region(source).id(),
            self.map.region(target).id(),
            armies,
        );
        self.responses.push(token);
        Ok(())
    }

    fn require_me(&self) -> Result<&str, EngineError> {
        self.me()
            .ok_or(EngineError::MissingSetting { setting: "your_bot" })
    }

    /// Serialize and clear the response queue.
    pub(crate) fn take_response_line(&mut self) -> String {
        self.responses
            .take_line(&self.config.delimiter, &self.config.no_moves)
    }
}
