//! Shapes Sandbox entry point
//!
//! Up arrow adds a shape, Down arrow removes one (never below the floor).

use std::process::ExitCode;

use shapes_sandbox::Settings;
use shapes_sandbox::platform;

fn main() -> ExitCode {
    platform::init_logging();
    log::info!("Shapes Sandbox starting...");

    let seed: u64 = rand::random();
    match platform::run(Settings::default(), seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
