//! Game map state: regions, super regions and their relations.

mod types;
mod world;

#[cfg(test)]
mod tests;

pub use types::{Extension, Region, RegionIdx, SuperRegion, SuperRegionIdx};
pub use world::WorldMap;
