//! Command-line interface for the Wayfinder route finder.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod render;
mod route;

pub use error::CliError;
use route::RouteArgs;

pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_DESTINATION: &str = "destination";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_GEOCODER_BASE_URL: &str = "geocoder-base-url";
pub(crate) const ARG_USER_AGENT: &str = "user-agent";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_MAP_OUTPUT: &str = "map-output";
pub(crate) const ARG_JSON: &str = "json";
pub(crate) const ENV_START: &str = "WAYFINDER_CMDS_ROUTE_START";
pub(crate) const ENV_DESTINATION: &str = "WAYFINDER_CMDS_ROUTE_DESTINATION";

/// Run the Wayfinder CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns an error when argument parsing or configuration fails, when the
/// route cannot be found, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Find the shortest driving route between two places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Geocode two places, fetch a driving route and report its length.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
