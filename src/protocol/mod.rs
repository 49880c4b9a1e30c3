//! Warlight server protocol: message shapes and line matching.
//!
//! Every message the engine reacts to is a row in [`Registry::protocol`]:
//! a keyword [`Pattern`] capturing one group and, for messages that carry a
//! list, an [`ItemPattern`] splitting that group into records.

mod pattern;
mod registry;


pub use pattern::{Capture, Item, ItemPattern, Pattern, TokenClass};
pub use registry::{Dispatch, MessageKind, Payload, Registry, RegistryBuilder, Route};
