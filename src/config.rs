//! Engine and launch configuration.

/// Token written when a turn ends without any queued response.
pub const DEFAULT_NO_MOVES: &str = "No moves";
/// Separator placed between response tokens on the output line.
pub const DEFAULT_DELIMITER: &str = ",";
/// Owner token of regions nobody has claimed yet.
pub const DEFAULT_NEUTRAL_OWNER: &str = "neutral";

/// Environment variable holding the diagnostic log filter.
pub const ENV_LOG_FILTER: &str = "WARLIGHT_LOG";
/// Environment variable holding the sample bot's RNG seed.
pub const ENV_SEED: &str = "WARLIGHT_SEED";

/// Output formatting and map defaults used by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub no_moves: String,
    pub delimiter: String,
    pub neutral_owner: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            no_moves: DEFAULT_NO_MOVES.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            neutral_owner: DEFAULT_NEUTRAL_OWNER.to_string(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_no_moves(mut self, token: impl Into<String>) -> Self {
        self.no_moves = token.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_neutral_owner(mut self, owner: impl Into<String>) -> Self {
        self.neutral_owner = owner.into();
        self
    }
}

/// Process-level options for the bot binary.
///
/// The log filter is read separately by [`crate::logging::filter_from_env`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Seed for the sample bot; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl LaunchOptions {
    /// Read options from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build options from `(name, value)` pairs. Unrelated names are ignored.
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = LaunchOptions::default();
        for (name, value) in vars {
            options.apply(name.as_ref(), value.as_ref());
        }
        options
    }

    /// Apply one named option. Values that fail to parse keep the current setting.
    pub fn apply(&mut self, name: &str, value: &str) {
        let normalized = name.trim().to_ascii_uppercase();
        if normalized == ENV_SEED {
            if let Ok(seed) = value.trim().parse::<u64>() {
                self.seed = Some(seed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.no_moves, "No moves");
        assert_eq!(config.delimiter, ",");
        assert_eq!(config.neutral_owner, "neutral");
    }

    #[test]
    fn test_engine_config_builders() {
        let config = EngineConfig::default()
            .with_delimiter(", ")
            .with_no_moves("pass")
            .with_neutral_owner("unknown");
        assert_eq!(config.delimiter, ", ");
        assert_eq!(config.no_moves, "pass");
        assert_eq!(config.neutral_owner, "unknown");
    }

    #[test]
    fn test_launch_options_from_vars() {
        let options = LaunchOptions::from_vars([
            ("WARLIGHT_LOG", "debug"),
            ("WARLIGHT_SEED", "17"),
            ("PATH", "/usr/bin"),
        ]);
        assert_eq!(options.seed, Some(17));
    }

    #[test]
    fn test_launch_option_names_are_normalized() {
        let options = LaunchOptions::from_vars([(" warlight_seed ", " 9 ")]);
        assert_eq!(options.seed, Some(9));
    }

    #[test]
    fn test_launch_options_ignore_bad_values() {
        let options = LaunchOptions::from_vars([("WARLIGHT_SEED", "-4"), ("warlight_seed", "x")]);
        assert_eq!(options, LaunchOptions::default());
    }
}
