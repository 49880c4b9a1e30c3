//! Region and super region types.

use std::any::Any;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a region inside a [`WorldMap`](super::WorldMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionIdx(pub u32);

impl RegionIdx {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Index of a super region inside a [`WorldMap`](super::WorldMap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuperRegionIdx(pub u32);

impl SuperRegionIdx {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Typed slot where a collaborator can keep its own data on a map entity.
///
/// Holds at most one value; storing a value of another type replaces it.
#[derive(Default)]
pub struct Extension(Option<Box<dyn Any>>);

impl Extension {
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.0.as_ref().and_then(|value| value.downcast_ref::<T>())
    }

    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.0.as_mut().and_then(|value| value.downcast_mut::<T>())
    }

    pub fn insert<T: Any>(&mut self, value: T) {
        self.0 = Some(Box::new(value));
    }

    /// Remove the stored value if it has type `T`.
    pub fn take<T: Any>(&mut self) -> Option<T> {
        match self.0.take()?.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(other) => {
                self.0 = Some(other);
                None
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            f.write_str("Extension(..)")
        } else {
            f.write_str("Extension(empty)")
        }
    }
}

/// A cluster of regions granting `reward` armies to the player holding all of them.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuperRegion {
    id: String,
    pub reward: u32,
    regions: Vec<RegionIdx>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub ext: Extension,
}

impl SuperRegion {
    pub(crate) fn new(id: String, reward: u32) -> Self {
        SuperRegion {
            id,
            reward,
            regions: Vec::new(),
            ext: Extension::default(),
        }
    }

    /// Identity token sent by the server.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Member regions in declaration order.
    #[must_use]
    pub fn regions(&self) -> &[RegionIdx] {
        &self.regions
    }

    pub(crate) fn push_region(&mut self, region: RegionIdx) {
        self.regions.push(region);
    }
}

/// A single territory.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    id: String,
    super_region: SuperRegionIdx,
    pub owner: String,
    pub armies: u32,
    neighbours: Vec<RegionIdx>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub ext: Extension,
}

impl Region {
    pub(crate) fn new(id: String, super_region: SuperRegionIdx, owner: String) -> Self {
        Region {
            id,
            super_region,
            owner,
            armies: 0,
            neighbours: Vec::new(),
            ext: Extension::default(),
        }
    }

    /// Identity token sent by the server.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn super_region(&self) -> SuperRegionIdx {
        self.super_region
    }

    #[must_use]
    pub fn neighbours(&self) -> &[RegionIdx] {
        &self.neighbours
    }

    #[must_use]
    pub fn is_neighbour(&self, other: RegionIdx) -> bool {
        self.neighbours.contains(&other)
    }

    #[must_use]
    pub fn is_owned_by(&self, player: &str) -> bool {
        self.owner == player
    }

    pub(crate) fn push_neighbour(&mut self, other: RegionIdx) {
        self.neighbours.push(other);
    }
}
