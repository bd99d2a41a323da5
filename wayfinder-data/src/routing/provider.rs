//! HTTP-based `RouteFetcher` using OSRM's Route API.
//!
//! This module provides [`HttpRouteFetcher`], an implementation of the
//! [`RouteFetcher`] trait that fetches a driving route from an OSRM routing
//! service via HTTP.
//!
//! # Architecture
//!
//! The [`RouteFetcher`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This fetcher bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Failure classification
//!
//! - Transport failures, timeouts and 5xx statuses are
//!   [`RouteFetchError::ServiceUnavailable`].
//! - Any other non-success status is `ServiceUnavailable` too, unless its
//!   body is an OSRM error object, in which case the service has answered
//!   and the result is [`RouteFetchError::NoRouteFound`].
//! - A success status with an undecodable body, a non-`"Ok"` code, or no
//!   routes is `NoRouteFound`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;
use wayfinder_core::{Coordinate, RouteFetchError, RouteFetcher, RouteRaw};

use super::osrm::RouteResponse;
use crate::runtime::{BlockingRuntime, build_client, describe_reqwest_error, endpoint};
use crate::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError};

/// Public OSRM demo server.
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Configuration for [`HttpRouteFetcher`].
#[derive(Debug, Clone)]
pub struct HttpRouteFetcherConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpRouteFetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OSRM_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpRouteFetcherConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based route fetcher using the OSRM Route API.
///
/// This fetcher implements the synchronous [`RouteFetcher`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from within an existing multi-threaded Tokio runtime, the
/// fetcher uses that runtime's handle with [`tokio::task::block_in_place`].
/// Otherwise it uses its own stored runtime. Calls from a `current_thread`
/// runtime may deadlock if that runtime drives IO this request depends on.
#[derive(Debug)]
pub struct HttpRouteFetcher {
    client: Client,
    config: HttpRouteFetcherConfig,
    route_url: Url,
    runtime: BlockingRuntime,
}

impl HttpRouteFetcher {
    /// Create a new fetcher with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpRouteFetcherConfig::new(base_url))
    }

    /// Create a new fetcher with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpRouteFetcherConfig) -> Result<Self, ProviderBuildError> {
        let route_url = endpoint(&config.base_url, "route/v1/driving/")?;
        let client = build_client(config.timeout, &config.user_agent)?;
        let runtime = BlockingRuntime::new()?;
        Ok(Self {
            client,
            config,
            route_url,
            runtime,
        })
    }

    /// The configuration this fetcher was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpRouteFetcherConfig {
        &self.config
    }

    /// Build the OSRM Route API URL for the given endpoints.
    ///
    /// The URL format is:
    /// `{base_url}/route/v1/driving/{startLon},{startLat};{endLon},{endLat}?overview=full`
    fn build_route_url(&self, start: Coordinate, end: Coordinate) -> String {
        format!(
            "{}{},{};{},{}?overview=full",
            self.route_url,
            start.lon(),
            start.lat(),
            end.lon(),
            end.lat()
        )
    }

    /// Fetch the route asynchronously.
    async fn fetch_route_async(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteRaw, RouteFetchError> {
        let url = self.build_route_url(start, end);
        log::debug!("routing request: GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        Self::convert_body(status, &body, &url)
    }

    /// Convert a reqwest error to a `RouteFetchError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RouteFetchError {
        RouteFetchError::ServiceUnavailable {
            url: url.to_owned(),
            message: describe_reqwest_error(error, self.config.timeout),
        }
    }

    /// Classify a response by status and body.
    fn convert_body(status: StatusCode, body: &str, url: &str) -> Result<RouteRaw, RouteFetchError> {
        let unavailable = || RouteFetchError::ServiceUnavailable {
            url: url.to_owned(),
            message: format!("HTTP status {status}"),
        };
        if status.is_server_error() {
            return Err(unavailable());
        }

        let response = match serde_json::from_str::<RouteResponse>(body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => return Err(unavailable()),
            Err(err) => {
                log::warn!("discarding undecodable routing response from {url}: {err}");
                return Err(RouteFetchError::NoRouteFound {
                    message: format!("undecodable routing response: {err}"),
                });
            }
        };

        if !status.is_success() && response.code.is_none() {
            return Err(unavailable());
        }
        Self::convert_response(response)
    }

    /// Convert an OSRM response to a `RouteRaw`.
    fn convert_response(response: RouteResponse) -> Result<RouteRaw, RouteFetchError> {
        if !response.is_ok() {
            let message = response.failure_message();
            log::warn!("routing service declined the request: {message}");
            return Err(RouteFetchError::NoRouteFound { message });
        }

        let first = response
            .routes
            .and_then(|routes| routes.into_iter().next())
            .ok_or_else(|| RouteFetchError::NoRouteFound {
                message: "routing response contained no routes".to_owned(),
            })?;

        Ok(RouteRaw {
            distance_meters: first.distance,
            encoded_path: first.geometry,
        })
    }
}

impl RouteFetcher for HttpRouteFetcher {
    /// Fetch the first route between `start` and `end`.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime should
    /// be multi-threaded (`flavor = "multi_thread"`).
    fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<RouteRaw, RouteFetchError> {
        self.runtime.block_on(self.fetch_route_async(start, end))
    }
}
