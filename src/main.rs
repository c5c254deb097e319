use std::process::ExitCode;

use bingo_caller::config::Settings;
use bingo_caller::logging::init_logger;
use bingo_caller::platform;
use tracing::{error, info};

fn main() -> ExitCode {
    let settings = match Settings::load_default() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("bingo-caller: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = init_logger(&settings.log);
    info!("bingo-caller {} starting", env!("CARGO_PKG_VERSION"));

    match platform::run(&settings) {
        Ok(()) => {
            info!("Shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("bingo-caller: {}", e);
            ExitCode::FAILURE
        }
    }
}
