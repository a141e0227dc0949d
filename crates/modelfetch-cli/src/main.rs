use modelfetch_core::logging;

mod cli;

use crate::cli::{process_exit_code, CliCommand};

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    let result = CliCommand::run_from_args();
    if let Err(err) = &result {
        eprintln!("modelfetch error: {:#}", err);
    }
    std::process::exit(process_exit_code(&result));
}
