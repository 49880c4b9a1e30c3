//! Clean exit on termination signals.
//!
//! The message loop blocks on standard input, so signals are taken on a
//! dedicated thread that ends the process with a success status. Every
//! response line is flushed as it is written, so nothing is lost.

use std::io;
use std::process;
use std::thread;

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tracing::info;

/// Signals that end the bot cleanly.
pub const TERMINATION_SIGNALS: [i32; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Register the handlers and start the listener thread.
///
/// # Errors
///
/// Fails if the handlers cannot be registered or the thread cannot start.
pub fn install() -> io::Result<()> {
    let mut signals = Signals::new(TERMINATION_SIGNALS)?;
    thread::Builder::new()
        .name("shutdown".to_string())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                info!(signal, "shutdown signal received");
                process::exit(0);
            }
        })?;
    Ok(())
}
