//! Construction errors shared by the HTTP adapters.

use thiserror::Error;

/// Error returned when an HTTP adapter cannot be built.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected URL as configured.
        url: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
}
