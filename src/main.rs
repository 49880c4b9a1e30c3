use std::process::ExitCode;

use tracing::{error, info, warn};

use warlight_engine::{logging, Engine, LaunchOptions, RandomBot};

#[cfg(unix)]
fn install_shutdown() {
    if let Err(e) = warlight_engine::shutdown::install() {
        warn!("termination signals keep their default action: {e}");
    }
}

#[cfg(not(unix))]
fn install_shutdown() {}

fn main() -> ExitCode {
    if let Err(e) = logging::init(logging::filter_from_env()) {
        eprintln!("failed to install logger: {e}");
    }
    install_shutdown();

    let options = LaunchOptions::from_env();
    info!("starting warlight bot");

    let mut engine = Engine::new(RandomBot::new(options.seed));
    match engine.run_stdio() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}
