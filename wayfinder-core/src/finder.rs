//! Orchestrate geocoding, routing and path decoding into a [`RoutePlan`].
//!
//! [`RouteFinder`] runs a linear pipeline for each call:
//!
//! 1. validate both place names;
//! 2. geocode the start, then the destination;
//! 3. fetch one route between the resolved coordinates;
//! 4. decode the route geometry;
//! 5. assemble a validated [`RouteResult`] (metres converted to kilometres).
//!
//! The first failure ends the call. Nothing is retried and nothing is kept
//! between calls, so a failed search can simply be run again.

use std::fmt;

use thiserror::Error;

use crate::{
    Coordinate, GeocodeError, Geocoder, METRES_PER_KILOMETRE, PathDecoder, PlaceQuery, Polyline,
    RouteFetchError, RouteFetcher, RoutePlan, RouteRaw, RouteResult,
};

/// Which end of the journey a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The starting place.
    Start,
    /// The destination place.
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Destination => "destination",
        })
    }
}

/// Errors returned by [`RoutePlanner::find_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindRouteError {
    /// A place name was empty. No provider was contacted.
    #[error("enter both a starting place and a destination (the {which} place is empty)")]
    MissingInput {
        /// The empty field; the start is checked first.
        which: Endpoint,
    },
    /// A place name could not be geocoded.
    #[error("unable to geocode the {which} place: {source}")]
    GeocodingFailed {
        /// The endpoint whose lookup failed.
        which: Endpoint,
        /// Underlying geocoder failure.
        #[source]
        source: GeocodeError,
    },
    /// No usable route joined the two places.
    #[error("unable to find a route from {start} to {destination}: {source}")]
    RoutingFailed {
        /// Starting place label.
        start: String,
        /// Destination place label.
        destination: String,
        /// Underlying routing failure.
        #[source]
        source: RouteFetchError,
    },
}

/// Find a route between two free-text place names.
///
/// The trait lets front ends hold a boxed planner without naming the
/// provider types.
pub trait RoutePlanner {
    /// Run the full pipeline for `start` and `destination`.
    fn find_route(&self, start: &str, destination: &str) -> Result<RoutePlan, FindRouteError>;
}

/// Default [`RoutePlanner`] built from a geocoder, a route fetcher and a path
/// decoder.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, FindRouteError, RouteFinder, RoutePlanner};
/// use wayfinder_core::test_support::{StubGeocoder, StubRouteFetcher};
///
/// let geocoder = StubGeocoder::new()
///     .with_place("Paris", Coordinate::new(48.85, 2.35)?)
///     .with_place("Berlin", Coordinate::new(52.52, 13.40)?);
/// let finder = RouteFinder::new(geocoder, StubRouteFetcher::straight(1_050_000.0));
///
/// let plan = finder.find_route("Paris", "Berlin")?;
/// assert_eq!(plan.summary(), "Shortest distance from Paris to Berlin: 1050.00 km");
///
/// let err = finder.find_route("", "Berlin").unwrap_err();
/// assert!(matches!(err, FindRouteError::MissingInput { .. }));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteFinder<G, R, D = Polyline> {
    geocoder: G,
    router: R,
    decoder: D,
}

impl<G, R> RouteFinder<G, R> {
    /// Create a finder decoding geometry with the default [`Polyline`] codec.
    pub fn new(geocoder: G, router: R) -> Self {
        Self {
            geocoder,
            router,
            decoder: Polyline::default(),
        }
    }
}

impl<G, R, D> RouteFinder<G, R, D> {
    /// Replace the path decoder.
    pub fn with_decoder<E>(self, decoder: E) -> RouteFinder<G, R, E> {
        RouteFinder {
            geocoder: self.geocoder,
            router: self.router,
            decoder,
        }
    }

    /// The geocoder in use.
    pub const fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// The route fetcher in use.
    pub const fn router(&self) -> &R {
        &self.router
    }

    /// The path decoder in use.
    pub const fn decoder(&self) -> &D {
        &self.decoder
    }
}

impl<G, R, D> RouteFinder<G, R, D>
where
    G: Geocoder,
    R: RouteFetcher,
    D: PathDecoder,
{
    fn locate(&self, which: Endpoint, place: &PlaceQuery) -> Result<Coordinate, FindRouteError> {
        log::debug!("geocoding {which} place {place:?}");
        self.geocoder
            .geocode(place)
            .map_err(|source| FindRouteError::GeocodingFailed { which, source })
    }

    fn assemble(&self, raw: &RouteRaw) -> Result<RouteResult, RouteFetchError> {
        let path = self.decoder.decode(&raw.encoded_path);
        log::debug!(
            "decoded {} points from {} bytes of geometry",
            path.len(),
            raw.encoded_path.len()
        );
        RouteResult::new(raw.distance_meters / METRES_PER_KILOMETRE, path).map_err(|err| {
            RouteFetchError::NoRouteFound {
                message: err.to_string(),
            }
        })
    }
}

impl<G, R, D> RoutePlanner for RouteFinder<G, R, D>
where
    G: Geocoder,
    R: RouteFetcher,
    D: PathDecoder,
{
    fn find_route(&self, start: &str, destination: &str) -> Result<RoutePlan, FindRouteError> {
        let start = require_place(start, Endpoint::Start)?;
        let destination = require_place(destination, Endpoint::Destination)?;

        let start_coordinate = self.locate(Endpoint::Start, &start)?;
        let destination_coordinate = self.locate(Endpoint::Destination, &destination)?;

        let routing_failed = |source| FindRouteError::RoutingFailed {
            start: start.to_string(),
            destination: destination.to_string(),
            source,
        };
        let raw = self
            .router
            .fetch_route(start_coordinate, destination_coordinate)
            .map_err(routing_failed)?;
        let route = self.assemble(&raw).map_err(routing_failed)?;

        log::info!(
            "found a {:.2} km route from {start} to {destination}",
            route.distance_km()
        );
        Ok(RoutePlan {
            start,
            destination,
            start_coordinate,
            destination_coordinate,
            route,
        })
    }
}

impl<T: RoutePlanner + ?Sized> RoutePlanner for Box<T> {
    fn find_route(&self, start: &str, destination: &str) -> Result<RoutePlan, FindRouteError> {
        (**self).find_route(start, destination)
    }
}

fn require_place(label: &str, which: Endpoint) -> Result<PlaceQuery, FindRouteError> {
    PlaceQuery::new(label).map_err(|_| FindRouteError::MissingInput { which })
}
