//! Arena holding every region and super region of the current game.

use std::collections::HashMap;

use crate::config::DEFAULT_NEUTRAL_OWNER;
use crate::error::EngineError;

use super::types::{Region, RegionIdx, SuperRegion, SuperRegionIdx};

/// The game map.
///
/// Entities live in two vectors and refer to each other through
/// [`RegionIdx`] / [`SuperRegionIdx`]. Identity tokens from the protocol are
/// resolved through the lookup tables. Nothing is ever removed, so an index
/// handed out by this map stays valid for its whole lifetime.
///
/// Topology is fixed by the `setup_map` messages. Code outside the engine
/// can change owners, armies and extension slots, but cannot declare
/// regions or link neighbours:
///
/// ```compile_fail
/// let mut map = warlight_engine::WorldMap::default();
/// map.add_super_region("1", 5).unwrap();
/// ```
///
/// ```compile_fail
/// let mut map = warlight_engine::WorldMap::default();
/// let a = map.find_region("1").unwrap();
/// map.link(a, a);
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldMap {
    super_regions: Vec<SuperRegion>,
    regions: Vec<Region>,
    super_region_ids: HashMap<String, SuperRegionIdx>,
    region_ids: HashMap<String, RegionIdx>,
    neutral_owner: String,
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new(DEFAULT_NEUTRAL_OWNER)
    }
}

impl WorldMap {
    /// Create an empty map whose regions start owned by `neutral_owner`.
    #[must_use]
    pub fn new(neutral_owner: impl Into<String>) -> Self {
        WorldMap {
            super_regions: Vec::new(),
            regions: Vec::new(),
            super_region_ids: HashMap::new(),
            region_ids: HashMap::new(),
            neutral_owner: neutral_owner.into(),
        }
    }

    #[must_use]
    pub fn neutral_owner(&self) -> &str {
        &self.neutral_owner
    }

    /// Declare a super region.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateSuperRegion`] if `id` is already declared.
    pub(crate) fn add_super_region(&mut self, id: &str, reward: u32) -> Result<SuperRegionIdx, EngineError> {
        if self.super_region_ids.contains_key(id) {
            return Err(EngineError::DuplicateSuperRegion { id: id.to_string() });
        }
        let idx = SuperRegionIdx(self.super_regions.len() as u32);
        self.super_regions.push(SuperRegion::new(id.to_string(), reward));
        self.super_region_ids.insert(id.to_string(), idx);
        Ok(idx)
    }

    /// Declare a region as a member of `super_region`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateRegion`] if `id` is already declared.
    pub(crate) fn add_region(
        &mut self,
        id: &str,
        super_region: SuperRegionIdx,
    ) -> Result<RegionIdx, EngineError> {
        if self.region_ids.contains_key(id) {
            return Err(EngineError::DuplicateRegion { id: id.to_string() });
        }
        let idx = RegionIdx(self.regions.len() as u32);
        self.regions.push(Region::new(
            id.to_string(),
            super_region,
            self.neutral_owner.clone(),
        ));
        self.region_ids.insert(id.to_string(), idx);
        self.super_regions[super_region.as_usize()].push_region(idx);
        Ok(idx)
    }

    /// Make `a` and `b` neighbours of each other.
    ///
    /// Linking an already linked pair changes nothing. Returns whether a new
    /// link was created.
    pub(crate) fn link(&mut self, a: RegionIdx, b: RegionIdx) -> bool {
        if self.regions[a.as_usize()].is_neighbour(b) {
            return false;
        }
        self.regions[a.as_usize()].push_neighbour(b);
        if a != b {
            self.regions[b.as_usize()].push_neighbour(a);
        }
        true
    }

    /// Overwrite owner and army count of a region.
    pub fn update(&mut self, idx: RegionIdx, owner: &str, armies: u32) {
        let region = &mut self.regions[idx.as_usize()];
        if region.owner != owner {
            region.owner = owner.to_string();
        }
        region.armies = armies;
    }

    #[must_use]
    pub fn region(&self, idx: RegionIdx) -> &Region {
        &self.regions[idx.as_usize()]
    }

    pub fn region_mut(&mut self, idx: RegionIdx) -> &mut Region {
        &mut self.regions[idx.as_usize()]
    }

    #[must_use]
    pub fn super_region(&self, idx: SuperRegionIdx) -> &SuperRegion {
        &self.super_regions[idx.as_usize()]
    }

    pub fn super_region_mut(&mut self, idx: SuperRegionIdx) -> &mut SuperRegion {
        &mut self.super_regions[idx.as_usize()]
    }

    /// Look up a region by its identity token.
    #[must_use]
    pub fn find_region(&self, id: &str) -> Option<RegionIdx> {
        self.region_ids.get(id).copied()
    }

    /// Look up a super region by its identity token.
    #[must_use]
    pub fn find_super_region(&self, id: &str) -> Option<SuperRegionIdx> {
        self.super_region_ids.get(id).copied()
    }

    /// Like [`find_region`](Self::find_region), failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRegion`] if `id` was never declared.
    pub fn resolve_region(&self, id: &str) -> Result<RegionIdx, EngineError> {
        self.find_region(id)
            .ok_or_else(|| EngineError::UnknownRegion { id: id.to_string() })
    }

    /// Like [`find_super_region`](Self::find_super_region), failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownSuperRegion`] if `id` was never declared.
    pub fn resolve_super_region(&self, id: &str) -> Result<SuperRegionIdx, EngineError> {
        self.find_super_region(id)
            .ok_or_else(|| EngineError::UnknownSuperRegion { id: id.to_string() })
    }

    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn super_region_count(&self) -> usize {
        self.super_regions.len()
    }

    /// All regions with their indices, in declaration order.
    pub fn regions(&self) -> impl Iterator<Item = (RegionIdx, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, region)| (RegionIdx(i as u32), region))
    }

    /// All super regions with their indices, in declaration order.
    pub fn super_regions(&self) -> impl Iterator<Item = (SuperRegionIdx, &SuperRegion)> {
        self.super_regions
            .iter()
            .enumerate()
            .map(|(i, super_region)| (SuperRegionIdx(i as u32), super_region))
    }

    /// Regions currently owned by `player`.
    pub fn owned_by<'a>(&'a self, player: &'a str) -> impl Iterator<Item = RegionIdx> + 'a {
        self.regions()
            .filter(move |(_, region)| region.is_owned_by(player))
            .map(|(idx, _)| idx)
    }

    /// The player holding every region of a super region, if there is one.
    ///
    /// Empty and neutral super regions have no controller.
    #[must_use]
    pub fn controller(&self, idx: SuperRegionIdx) -> Option<&str> {
        let mut members = self.super_region(idx).regions().iter();
        let owner = self.region(*members.next()?).owner.as_str();
        if owner == self.neutral_owner {
            return None;
        }
        members
            .all(|&r| self.region(r).owner == owner)
            .then_some(owner)
    }

    /// Total bonus armies `player` earns from fully held super regions.
    #[must_use]
    pub fn reward_for(&self, player: &str) -> u32 {
        self.super_regions()
            .filter(|(idx, _)| self.controller(*idx) == Some(player))
            .map(|(_, super_region)| super_region.reward)
            .sum()
    }
}
