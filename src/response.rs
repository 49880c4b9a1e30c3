//! Response tokens and the per-turn response queue.
//!
//! Tokens are plain strings built by the `format_*` helpers. Nothing here
//! checks that a move is legal; that is the collaborator's business.

/// Verb the server uses for army placements.
pub const PLACE_ARMIES: &str = "place_armies";
/// Verb the server uses for attacks and transfers.
pub const ATTACK_TRANSFER: &str = "attack/transfer";

/// Starting region pick: the chosen ids separated by single spaces.
pub fn format_starting_regions<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for id in ids {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(id.as_ref());
    }
    line
}

#[must_use]
pub fn format_placement(owner: &str, region: &str, armies: u32) -> String {
    format!("{owner} {PLACE_ARMIES} {region} {armies}")
}

#[must_use]
pub fn format_attack_or_transfer(owner: &str, source: &str, target: &str, armies: u32) -> String {
    format!("{owner} {ATTACK_TRANSFER} {source} {target} {armies}")
}

/// Tokens queued for the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Responses {
    tokens: Vec<String>,
}

impl Responses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Drop everything queued so far and queue `token` alone.
    pub fn replace(&mut self, token: impl Into<String>) {
        self.tokens.clear();
        self.tokens.push(token.into());
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Serialize the queue into one output line (without newline) and empty it.
    ///
    /// An empty queue yields `no_moves`.
    pub fn take_line(&mut self, delimiter: &str, no_moves: &str) -> String {
        if self.tokens.is_empty() {
            return no_moves.to_string();
        }
        let line = self.tokens.join(delimiter);
        self.tokens.clear();
        line
    }
}
