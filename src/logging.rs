//! Diagnostic output on standard error.
//!
//! Standard output carries protocol responses only, so every diagnostic goes
//! through `tracing` into a `fmt` subscriber writing to standard error. The
//! filter comes from `WARLIGHT_LOG` using the usual `EnvFilter` directive
//! syntax, e.g. `debug` or `warlight_engine::engine=trace`.

use std::io::{self, IsTerminal};

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG_FILTER;

/// Filter used when `WARLIGHT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Read the log filter from the environment.
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the diagnostic subscriber writing through `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Install the standard error subscriber as the global default.
///
/// # Errors
///
/// Fails if another subscriber was installed first.
pub fn init(filter: EnvFilter) -> Result<(), SetGlobalDefaultError> {
    let ansi = io::stderr().is_terminal();
    tracing::subscriber::set_global_default(subscriber(filter, io::stderr, ansi))
}
