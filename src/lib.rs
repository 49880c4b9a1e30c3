//! Warlight bot engine.
//!
//! Reads the line protocol of the Warlight AI server, keeps a model of the
//! map, and hands every decision to a [`Collaborator`].
//!
//! # Example
//! ```
//! use std::io::Cursor;
//! use std::time::Duration;
//!
//! use warlight_engine::{Collaborator, Engine, EngineError, Session};
//!
//! struct Passive;
//!
//! impl Collaborator for Passive {
//!     fn on_go_place_armies(&mut self, _: &mut Session, _: Duration) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn on_go_attack_or_transfer(&mut self, _: &mut Session, _: Duration) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//! }
//!
//! let input = "setup_map super_regions 1 5\nsetup_map regions 10 1\ngo place_armies 1000\n";
//! let mut out = Vec::new();
//! let mut engine = Engine::new(Passive);
//! engine.run(Cursor::new(input), &mut out).unwrap();
//! assert_eq!(out, b"No moves\n");
//! ```

pub mod bot;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod map;
pub mod protocol;
pub mod response;
#[cfg(unix)]
pub mod shutdown;

pub use bot::RandomBot;
pub use config::{EngineConfig, LaunchOptions};
pub use engine::{Collaborator, Engine, Session, Settings};
pub use error::EngineError;
pub use map::{Region, RegionIdx, SuperRegion, SuperRegionIdx, WorldMap};
