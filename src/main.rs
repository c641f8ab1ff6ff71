use std::io;
use std::process::ExitCode;

use rusty_crm::prelude::run_app;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();

    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
