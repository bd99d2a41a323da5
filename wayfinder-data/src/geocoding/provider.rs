//! HTTP-based [`Geocoder`] using Nominatim's search API.

use std::time::Duration;

use reqwest::Client;
use url::Url;
use wayfinder_core::{Coordinate, GeocodeError, Geocoder, PlaceQuery};

use super::nominatim::SearchMatch;
use crate::runtime::{BlockingRuntime, build_client, describe_reqwest_error, endpoint};
use crate::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError};

/// Public Nominatim instance operated by the OpenStreetMap Foundation.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for [`HttpGeocoder`].
#[derive(Debug, Clone)]
pub struct HttpGeocoderConfig {
    /// Base URL for the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests. Nominatim's usage policy requires
    /// one that identifies the application.
    pub user_agent: String,
}

impl Default for HttpGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpGeocoderConfig {
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

/// Geocoder backed by a Nominatim-compatible search endpoint.
///
/// Each lookup issues a single `GET {base_url}/search?q=..&format=jsonv2&limit=1`
/// and takes the first match. Ambiguous names resolve to whatever the
/// service ranks highest, which may change as its data is updated.
#[derive(Debug)]
pub struct HttpGeocoder {
    client: Client,
    config: HttpGeocoderConfig,
    search_url: Url,
    runtime: BlockingRuntime,
}

impl HttpGeocoder {
    /// Create a geocoder for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpGeocoderConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpGeocoderConfig) -> Result<Self, ProviderBuildError> {
        let search_url = endpoint(&config.base_url, "search")?;
        let client = build_client(config.timeout, &config.user_agent)?;
        let runtime = BlockingRuntime::new()?;
        Ok(Self {
            client,
            config,
            search_url,
            runtime,
        })
    }

    /// The configuration this geocoder was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpGeocoderConfig {
        &self.config
    }

    fn build_search_url(&self, place: &PlaceQuery) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", place.as_str())
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }

    async fn geocode_async(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        let url = self.build_search_url(place);
        log::debug!("geocoding request: GET {url}");

        let unavailable = |err: &reqwest::Error| {
            GeocodeError::service_unavailable(
                place,
                describe_reqwest_error(err, self.config.timeout),
            )
        };
        let matches: Vec<SearchMatch> = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| unavailable(&err))?
            .error_for_status()
            .map_err(|err| unavailable(&err))?
            .json()
            .await
            .map_err(|err| {
                GeocodeError::service_unavailable(
                    place,
                    format!("undecodable geocoding response: {err}"),
                )
            })?;

        convert_matches(place, matches)
    }
}

fn convert_matches(
    place: &PlaceQuery,
    matches: Vec<SearchMatch>,
) -> Result<Coordinate, GeocodeError> {
    let Some(first) = matches.into_iter().next() else {
        log::debug!("no geocoding match for {place:?}");
        return Err(GeocodeError::not_found(place));
    };
    let coordinate = first.coordinate().map_err(|err| {
        log::warn!("discarding geocoding match for {place:?}: {err}");
        GeocodeError::service_unavailable(place, format!("invalid coordinates in response: {err}"))
    })?;
    log::debug!(
        "geocoded {place:?} to ({}, {}) via {}",
        coordinate.lat(),
        coordinate.lon(),
        first.display_name.as_deref().unwrap_or("<unnamed match>")
    );
    Ok(coordinate)
}

impl Geocoder for HttpGeocoder {
    fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        self.runtime.block_on(self.geocode_async(place))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn geocoder() -> HttpGeocoder {
        HttpGeocoder::new("http://nominatim.example.com/").expect("geocoder should build")
    }

    fn place(name: &str) -> PlaceQuery {
        PlaceQuery::new(name).expect("valid place")
    }

    fn found(lat: &str, lon: &str) -> SearchMatch {
        SearchMatch {
            lat: lat.to_owned(),
            lon: lon.to_owned(),
            display_name: None,
        }
    }

    #[rstest]
    fn search_url_escapes_the_place_name(geocoder: HttpGeocoder) {
        let url = geocoder.build_search_url(&place("Saint-Denis & Co"));
        assert_eq!(
            url.as_str(),
            "http://nominatim.example.com/search?q=Saint-Denis+%26+Co&format=jsonv2&limit=1"
        );
    }

    #[rstest]
    fn empty_matches_are_not_found() {
        let err = convert_matches(&place("Atlantis"), Vec::new()).expect_err("should fail");
        assert_eq!(
            err,
            GeocodeError::NotFound {
                place: "Atlantis".to_owned()
            }
        );
    }

    #[rstest]
    fn first_match_wins() {
        let coordinate = convert_matches(
            &place("Springfield"),
            vec![found("39.8", "-89.6"), found("42.1", "-72.5")],
        )
        .expect("should resolve");
        assert_eq!(coordinate, Coordinate::new(39.8, -89.6).expect("valid"));
    }

    #[rstest]
    fn malformed_match_is_service_failure() {
        let err = convert_matches(&place("Paris"), vec![found("", "2.35")])
            .expect_err("should fail");
        assert!(matches!(err, GeocodeError::ServiceUnavailable { .. }));
    }

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpGeocoderConfig::new("http://example.com")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test-agent/1.0");

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn invalid_base_url_is_rejected() {
        let err = HttpGeocoder::new("not a url").expect_err("should fail");
        assert!(matches!(err, ProviderBuildError::InvalidBaseUrl { .. }));
    }
}
