//! Fetch a driving route between two coordinates.

use thiserror::Error;

use crate::{Coordinate, RouteRaw};

/// Errors from [`RouteFetcher::fetch_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteFetchError {
    /// The provider answered but offered no usable route: the candidate list
    /// was missing or empty, the body could not be decoded, or the route
    /// failed validation.
    #[error("no route found: {message}")]
    NoRouteFound {
        /// Provider detail, if any.
        message: String,
    },
    /// The provider could not be reached or failed before answering.
    #[error("routing service unavailable at {url}: {message}")]
    ServiceUnavailable {
        /// Request URL.
        url: String,
        /// Transport or status detail.
        message: String,
    },
}

/// Retrieve the first route candidate between two points.
///
/// Implementations issue exactly one request and return the provider's raw
/// units (metres, encoded geometry); conversion happens in
/// [`RouteFinder`](crate::RouteFinder).
///
/// # Examples
///
/// ```rust
/// use wayfinder_core::{Coordinate, RouteFetchError, RouteFetcher, RouteRaw, encode_path};
///
/// struct Straight;
///
/// impl RouteFetcher for Straight {
///     fn fetch_route(
///         &self,
///         start: Coordinate,
///         end: Coordinate,
///     ) -> Result<RouteRaw, RouteFetchError> {
///         Ok(RouteRaw {
///             distance_meters: 1_000.0,
///             encoded_path: encode_path(&[start, end]),
///         })
///     }
/// }
///
/// let a = Coordinate::new(0.0, 0.0)?;
/// let b = Coordinate::new(0.0, 0.01)?;
/// let raw = Straight.fetch_route(a, b)?;
/// assert_eq!(raw.distance_meters, 1_000.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait RouteFetcher {
    /// Fetch the first driving route from `start` to `end`.
    fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<RouteRaw, RouteFetchError>;
}

impl<T: RouteFetcher + ?Sized> RouteFetcher for &T {
    fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<RouteRaw, RouteFetchError> {
        (**self).fetch_route(start, end)
    }
}

impl<T: RouteFetcher + ?Sized> RouteFetcher for Box<T> {
    fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<RouteRaw, RouteFetchError> {
        (**self).fetch_route(start, end)
    }
}
