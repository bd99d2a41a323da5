//! Validated WGS84 coordinates.

use geo::Coord;
use thiserror::Error;

/// A geographic position in WGS84 degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`. The order is
/// the natural `(lat, lon)`; conversions to [`geo::Coord`] use `x = lon` and
/// `y = lat`.
///
/// # Examples
/// ```
/// use wayfinder_core::Coordinate;
///
/// let paris = Coordinate::new(48.8566, 2.3522)?;
/// assert_eq!(paris.lat(), 48.8566);
/// assert_eq!(paris.lon(), 2.3522);
/// # Ok::<(), wayfinder_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CoordinateFields"))]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinate components must be finite")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {lat} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        lat: f64,
    },
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {lon} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        lon: f64,
    },
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange { lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange { lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lon(self) -> f64 {
        self.lon
    }

    /// Arithmetic midpoint of two coordinates.
    ///
    /// This is the plain average of both components, not the great-circle
    /// midpoint; it is only used to centre a map view.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::Coordinate;
    ///
    /// let a = Coordinate::new(10.0, 20.0)?;
    /// let b = Coordinate::new(20.0, 40.0)?;
    /// let mid = a.midpoint(b);
    /// assert_eq!((mid.lat(), mid.lon()), (15.0, 30.0));
    /// # Ok::<(), wayfinder_core::CoordinateError>(())
    /// ```
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        // The mean of two in-range values stays in range.
        Self {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }

    /// Whether both components lie within `epsilon` degrees of `other`.
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.lat - other.lat).abs() <= epsilon && (self.lon - other.lon).abs() <= epsilon
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CoordinateFields {
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateFields> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: CoordinateFields) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lon)
    }
}
