//! Error types emitted by the Wayfinder CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wayfinder_core::FindRouteError;
use wayfinder_data::ProviderBuildError;

/// Errors emitted by the Wayfinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it as an argument or set {env})")]
    MissingArgument {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The request timeout was set to zero.
    #[error("--{field} must be at least one second")]
    InvalidTimeout {
        /// Argument name.
        field: &'static str,
    },
    /// Constructing the geocoder failed.
    #[error("failed to build geocoder for {base_url:?}: {source}")]
    BuildGeocoder {
        /// Configured service URL.
        base_url: String,
        /// Underlying failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Constructing the route fetcher failed.
    #[error("failed to build route fetcher for {base_url:?}: {source}")]
    BuildRouteFetcher {
        /// Configured service URL.
        base_url: String,
        /// Underlying failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The route search failed.
    #[error(transparent)]
    Route(#[from] FindRouteError),
    /// Serialising the route report failed.
    #[error("failed to serialise route report: {0}")]
    SerialiseRoute(#[source] serde_json::Error),
    /// Rendering the map page failed.
    #[error("failed to render map: {0}")]
    RenderMap(#[source] serde_json::Error),
    /// Writing the map page failed.
    #[error("failed to write map to {path:?}: {source}")]
    WriteMap {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing to standard output failed.
    #[error("failed to write route output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
