//! Error types for protocol dispatch and map updates.

use std::fmt;
use std::io;
use std::num::ParseIntError;

/// Fatal engine error.
///
/// Anything surfacing as an `EngineError` terminates the message loop: the
/// game server is trusted, so a reference to an undeclared region or a
/// malformed number means the two sides disagree about the game.
#[derive(Debug)]
pub enum EngineError {
    /// A message referenced a region that was never declared
    UnknownRegion { id: String },
    /// A message referenced a super region that was never declared
    UnknownSuperRegion { id: String },
    /// A region identity was declared twice
    DuplicateRegion { id: String },
    /// A super region identity was declared twice
    DuplicateSuperRegion { id: String },
    /// A numeric field could not be parsed
    InvalidNumber { field: &'static str, value: String },
    /// A required field was absent from a message
    MissingField { message: &'static str, field: &'static str },
    /// A response needed a setting the server has not sent yet
    MissingSetting { setting: &'static str },
    /// A route produced data in a shape its message kind cannot use
    MismatchedPayload { kind: String },
    /// Reading input or writing output failed
    Io(io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownRegion { id } => write!(f, "Unknown region '{id}'"),
            EngineError::UnknownSuperRegion { id } => write!(f, "Unknown super region '{id}'"),
            EngineError::DuplicateRegion { id } => {
                write!(f, "Region '{id}' was already declared")
            }
            EngineError::DuplicateSuperRegion { id } => {
                write!(f, "Super region '{id}' was already declared")
            }
            EngineError::InvalidNumber { field, value } => {
                write!(f, "Invalid number '{value}' for {field}")
            }
            EngineError::MissingField { message, field } => {
                write!(f, "Message '{message}' is missing its {field}")
            }
            EngineError::MissingSetting { setting } => {
                write!(f, "Setting '{setting}' has not been received")
            }
            EngineError::MismatchedPayload { kind } => {
                write!(f, "Route for {kind} produced the wrong payload shape")
            }
            EngineError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e)
    }
}

impl EngineError {
    /// Wrap a failed integer parse, keeping the offending text.
    pub(crate) fn invalid_number(field: &'static str, value: &str, _err: ParseIntError) -> Self {
        EngineError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }
}

/// Parse a numeric protocol field, mapping failures to [`EngineError::InvalidNumber`].
pub(crate) fn parse_number<T>(field: &'static str, value: &str) -> Result<T, EngineError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .parse::<T>()
        .map_err(|e| EngineError::invalid_number(field, value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_digits() {
        let armies: u32 = parse_number("armies", "42").unwrap();
        assert_eq!(armies, 42);
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        let err = parse_number::<u32>("armies", "99999999999999").unwrap_err();
        assert!(matches!(err, EngineError::InvalidNumber { field: "armies", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid number '99999999999999' for armies"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = EngineError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
    }
}
