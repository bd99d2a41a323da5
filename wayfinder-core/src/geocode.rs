//! Resolve place names to coordinates.
//!
//! The [`Geocoder`] trait abstracts a single forward lookup against an
//! external geocoding service. Implementations make exactly one attempt and
//! normalise every failure into [`GeocodeError`].
//!
//! When a name matches several real-world places the provider's first (best)
//! match wins. That choice is made by the provider, so results for ambiguous
//! names may change between calls or provider versions.

use thiserror::Error;

use crate::{Coordinate, PlaceQuery};

/// Errors from [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The provider returned no match for the place.
    #[error("could not find coordinates for {place}")]
    NotFound {
        /// Place name that was looked up.
        place: String,
    },
    /// The lookup could not complete: timeout, transport failure, a
    /// non-success status or an unreadable response.
    #[error("geocoding service timed out or failed for {place}: {message}")]
    ServiceUnavailable {
        /// Place name that was looked up.
        place: String,
        /// Provider or transport detail.
        message: String,
    },
}

impl GeocodeError {
    /// Build a [`GeocodeError::NotFound`] for `place`.
    #[must_use]
    pub fn not_found(place: &PlaceQuery) -> Self {
        Self::NotFound {
            place: place.as_str().to_owned(),
        }
    }

    /// Build a [`GeocodeError::ServiceUnavailable`] for `place`.
    #[must_use]
    pub fn service_unavailable(place: &PlaceQuery, message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            place: place.as_str().to_owned(),
            message: message.into(),
        }
    }

    /// The place name the failed lookup was for.
    #[must_use]
    pub fn place(&self) -> &str {
        match self {
            Self::NotFound { place } | Self::ServiceUnavailable { place, .. } => place,
        }
    }
}

/// Look up the coordinates of a place name.
///
/// # Examples
///
/// ```rust
/// use wayfinder_core::{Coordinate, GeocodeError, Geocoder, PlaceQuery};
///
/// struct NullIsland;
///
/// impl Geocoder for NullIsland {
///     fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
///         if place.as_str() == "Null Island" {
///             Coordinate::new(0.0, 0.0)
///                 .map_err(|err| GeocodeError::service_unavailable(place, err.to_string()))
///         } else {
///             Err(GeocodeError::not_found(place))
///         }
///     }
/// }
///
/// let place = PlaceQuery::new("Null Island")?;
/// assert_eq!(NullIsland.geocode(&place)?, Coordinate::new(0.0, 0.0)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Geocoder {
    /// Resolve `place` to the provider's best match.
    fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        (**self).geocode(place)
    }
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        (**self).geocode(place)
    }
}
