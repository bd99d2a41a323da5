//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env};
use wayfinder_cli::CliError;

fn main() {
    init_logging();
    match wayfinder_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors with its own exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfinder: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
