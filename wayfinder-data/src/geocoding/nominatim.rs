//! Nominatim search response types.
//!
//! The search endpoint returns a JSON array of matches ordered by relevance.
//! Coordinates are serialised as decimal strings, not numbers.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use serde::Deserialize;
use wayfinder_core::{Coordinate, CoordinateError};

/// One match from a Nominatim search.
#[derive(Debug, Deserialize)]
pub struct SearchMatch {
    /// Latitude in decimal degrees, as a string.
    pub lat: String,
    /// Longitude in decimal degrees, as a string.
    pub lon: String,
    /// Full human-readable name of the match.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Why a match could not be turned into a [`Coordinate`].
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// `lat` or `lon` was not a decimal number.
    #[error("unparsable {axis} {value:?}")]
    Unparsable {
        /// `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// Raw value from the payload.
        value: String,
    },
    /// The numbers parsed but lie outside WGS84 bounds.
    #[error(transparent)]
    OutOfRange(#[from] CoordinateError),
}

impl SearchMatch {
    /// Parse the string coordinates into a validated [`Coordinate`].
    pub fn coordinate(&self) -> Result<Coordinate, MatchError> {
        let lat = parse_axis("latitude", &self.lat)?;
        let lon = parse_axis("longitude", &self.lon)?;
        Ok(Coordinate::new(lat, lon)?)
    }
}

fn parse_axis(axis: &'static str, value: &str) -> Result<f64, MatchError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| MatchError::Unparsable {
            axis,
            value: value.to_owned(),
        })
}
