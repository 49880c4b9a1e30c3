//! Protocol engine: reads server messages, keeps the game state current and
//! asks the [`Collaborator`] for decisions.
//!
//! The engine is strictly single-threaded. A line is read, matched against
//! [`Registry::protocol`], handled to completion (including any collaborator
//! callbacks), and only then is the next line read. Time budgets sent by the
//! server are passed through untouched; the engine never measures or
//! enforces them.

mod collaborator;
mod handlers;
mod session;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, ErrorKind, Write};

use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::protocol::{Dispatch, MessageKind, Payload, Registry};

pub use collaborator::Collaborator;
pub use session::{Session, Settings};

/// Drives a [`Collaborator`] from protocol input.
pub struct Engine<C> {
    collaborator: C,
    session: Session,
    registry: &'static Registry,
}

impl<C: Collaborator> Engine<C> {
    #[must_use]
    pub fn new(collaborator: C) -> Self {
        Self::with_config(collaborator, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(collaborator: C, config: EngineConfig) -> Self {
        Self::with_registry(collaborator, config, Registry::protocol())
    }

    /// Build an engine that dispatches through `registry` instead of the
    /// standard protocol table.
    #[must_use]
    pub fn with_registry(collaborator: C, config: EngineConfig, registry: &'static Registry) -> Self {
        Engine {
            collaborator,
            session: Session::new(config),
            registry,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    pub fn collaborator_mut(&mut self) -> &mut C {
        &mut self.collaborator
    }

    #[must_use]
    pub fn into_parts(self) -> (C, Session) {
        (self.collaborator, self.session)
    }

    /// Handle one protocol line, writing a response line to `out` if the
    /// message starts one of our turns.
    ///
    /// Returns `Ok(false)` when no route matches; such lines are ignored.
    ///
    /// # Errors
    ///
    /// Unknown region ids, malformed numbers, duplicate declarations,
    /// collaborator failures and output errors.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool, EngineError> {
        let Some(dispatch) = self.registry.dispatch(line) else {
            trace!("ignoring line: {line}");
            return Ok(false);
        };
        self.handle(dispatch, out)?;
        Ok(true)
    }

    fn handle<W: Write>(&mut self, dispatch: Dispatch<'_>, out: &mut W) -> Result<(), EngineError> {
        match (dispatch.kind, dispatch.payload) {
            (MessageKind::SetupSuperRegions, Payload::Items(items)) => {
                self.setup_super_regions(&items)
            }
            (MessageKind::SetupRegions, Payload::Items(items)) => self.setup_regions(&items),
            (MessageKind::SetupNeighbors, Payload::Items(items)) => self.setup_neighbours(&items),
            (MessageKind::SettingsYourBot, Payload::Text(name)) => {
                self.settings_your_bot(name);
                Ok(())
            }
            (MessageKind::SettingsOpponentBot, Payload::Text(name)) => {
                self.settings_opponent_bot(name);
                Ok(())
            }
            (MessageKind::SettingsStartingArmies, Payload::Text(armies)) => {
                self.settings_starting_armies(armies)
            }
            (MessageKind::UpdateMap, Payload::Items(items)) => self.update_map(&items),
            (MessageKind::OpponentMoves, Payload::Items(items)) => self.opponent_moves(&items),
            (MessageKind::PickStartingRegions, Payload::Items(items)) => {
                self.pick_starting_regions(&items, out)
            }
            (MessageKind::GoPlaceArmies, Payload::Text(time)) => self.go_place_armies(time, out),
            (MessageKind::GoAttackTransfer, Payload::Text(time)) => {
                self.go_attack_or_transfer(time, out)
            }
            (kind, _) => Err(EngineError::MismatchedPayload {
                kind: format!("{kind:?}"),
            }),
        }
    }

    /// Write the queued responses as one line and clear the queue.
    fn respond<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let line = self.session.take_response_line();
        debug!("responding: {line}");
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }

    /// Process `input` until it ends.
    ///
    /// Blank lines are skipped. End of input and a closed output pipe end
    /// the loop normally.
    ///
    /// # Errors
    ///
    /// The first fatal error from [`handle_line`](Self::handle_line), or a
    /// failure reading `input`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<(), EngineError> {
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("input closed, shutting down");
                return Ok(());
            }

            let message = line.trim();
            if message.is_empty() {
                continue;
            }

            match self.handle_line(message, &mut out) {
                Ok(_) => {}
                Err(EngineError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
                    info!("output closed, shutting down");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run over the process's standard input and output.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_stdio(&mut self) -> Result<(), EngineError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}
