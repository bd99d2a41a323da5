//! Route payloads: the raw provider fields and the validated result.

use thiserror::Error;

use crate::{Coordinate, PlaceQuery};

/// Metres in one kilometre.
pub const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Fields extracted from the first route candidate of a routing response.
///
/// Units are the provider's: `distance_meters` is in metres and
/// `encoded_path` is a polyline string.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRaw {
    /// Total route length in metres.
    pub distance_meters: f64,
    /// Encoded route geometry.
    pub encoded_path: String,
}

/// A routed path with its length in kilometres.
///
/// Only constructed from a finite, non-negative distance and a path of at
/// least two coordinates.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, RouteResult};
///
/// let path = vec![Coordinate::new(48.85, 2.35)?, Coordinate::new(52.52, 13.40)?];
/// let route = RouteResult::new(1050.0, path)?;
/// assert_eq!(route.distance_km(), 1050.0);
/// assert_eq!(route.path().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RouteResultFields"))]
pub struct RouteResult {
    distance_km: f64,
    path: Vec<Coordinate>,
}

/// Errors returned by [`RouteResult::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RouteResultError {
    /// The distance was negative, NaN or infinite.
    #[error("route distance {distance_km} km is not a finite, non-negative value")]
    InvalidDistance {
        /// Rejected distance in kilometres.
        distance_km: f64,
    },
    /// The path held fewer than two coordinates.
    #[error("route path must contain at least two points, found {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },
}

impl RouteResult {
    /// Validates and constructs a [`RouteResult`].
    pub fn new(distance_km: f64, path: Vec<Coordinate>) -> Result<Self, RouteResultError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(RouteResultError::InvalidDistance { distance_km });
        }
        if path.len() < 2 {
            return Err(RouteResultError::TooFewPoints { count: path.len() });
        }
        Ok(Self { distance_km, path })
    }

    /// Total length in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Ordered coordinates from start to end.
    #[must_use]
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RouteResultFields {
    distance_km: f64,
    path: Vec<Coordinate>,
}

#[cfg(feature = "serde")]
impl TryFrom<RouteResultFields> for RouteResult {
    type Error = RouteResultError;

    fn try_from(value: RouteResultFields) -> Result<Self, Self::Error> {
        Self::new(value.distance_km, value.path)
    }
}

/// Successful outcome of a route search, ready for presentation.
///
/// Bundles the [`RouteResult`] with both endpoint labels and the coordinates
/// the geocoder resolved them to, so markers can be placed without another
/// lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Starting place as entered by the user.
    pub start: PlaceQuery,
    /// Destination place as entered by the user.
    pub destination: PlaceQuery,
    /// Resolved position of the starting place.
    pub start_coordinate: Coordinate,
    /// Resolved position of the destination.
    pub destination_coordinate: Coordinate,
    /// The routed path and its length.
    pub route: RouteResult,
}

impl RoutePlan {
    /// One-line, human-readable summary of the plan.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Coordinate, PlaceQuery, RoutePlan, RouteResult};
    ///
    /// let paris = Coordinate::new(48.85, 2.35)?;
    /// let berlin = Coordinate::new(52.52, 13.40)?;
    /// let plan = RoutePlan {
    ///     start: PlaceQuery::new("Paris")?,
    ///     destination: PlaceQuery::new("Berlin")?,
    ///     start_coordinate: paris,
    ///     destination_coordinate: berlin,
    ///     route: RouteResult::new(1050.0, vec![paris, berlin])?,
    /// };
    /// assert_eq!(
    ///     plan.summary(),
    ///     "Shortest distance from Paris to Berlin: 1050.00 km"
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Shortest distance from {} to {}: {:.2} km",
            self.start,
            self.destination,
            self.route.distance_km()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0).expect("valid coordinate"),
            Coordinate::new(1.0, 1.0).expect("valid coordinate"),
        ]
    }

    #[rstest]
    fn accepts_zero_distance(two_points: Vec<Coordinate>) {
        let route = RouteResult::new(0.0, two_points).expect("zero distance is valid");
        assert_eq!(route.distance_km(), 0.0);
    }

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_distance(#[case] distance: f64, two_points: Vec<Coordinate>) {
        let err = RouteResult::new(distance, two_points).expect_err("distance should be rejected");
        assert!(matches!(err, RouteResultError::InvalidDistance { .. }));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_short_paths(#[case] count: usize, two_points: Vec<Coordinate>) {
        let path = two_points.into_iter().take(count).collect();
        let err = RouteResult::new(12.0, path).expect_err("short path should be rejected");
        assert_eq!(err, RouteResultError::TooFewPoints { count });
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_enforces_invariants() {
        let json = r#"{"distance_km": 3.0, "path": [{"lat": 0.0, "lon": 0.0}]}"#;
        assert!(serde_json::from_str::<RouteResult>(json).is_err());
    }
}
