//! Command implementations for the balance data loader CLI

pub mod show;
pub mod validate;

use tracing::Level;

use crate::cli::args::{Args, Commands};

/// Dispatch the parsed CLI arguments to their command runner
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args),
        Some(Commands::Show(show_args)) => show::run_show(show_args),
        None => Ok(()),
    }
}

/// Initialize tracing output at the named level
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(level: &str) {
    let max_level = match level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init();
}
