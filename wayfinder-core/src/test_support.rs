//! Deterministic test doubles for the provider traits.
//!
//! The stubs answer from pre-configured data without touching the network
//! and count their invocations so tests can assert that a stage was skipped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    Coordinate, GeocodeError, Geocoder, PathDecoder, PlaceQuery, Polyline, RouteFetchError,
    RouteFetcher, RouteRaw, encode_path,
};

#[derive(Debug, Clone)]
enum StubPlace {
    Found(Coordinate),
    Unavailable(String),
}

/// Stub [`Geocoder`] resolving place names from a fixed table.
///
/// Unknown names yield [`GeocodeError::NotFound`]; names registered with
/// [`StubGeocoder::with_outage`] yield [`GeocodeError::ServiceUnavailable`].
///
/// # Example
///
/// ```
/// use wayfinder_core::{Coordinate, Geocoder, PlaceQuery};
/// use wayfinder_core::test_support::StubGeocoder;
///
/// let geocoder = StubGeocoder::new().with_place("Paris", Coordinate::new(48.85, 2.35)?);
/// let paris = geocoder.geocode(&PlaceQuery::new("Paris")?)?;
/// assert_eq!(paris.lat(), 48.85);
/// assert_eq!(geocoder.calls(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct StubGeocoder {
    places: HashMap<String, StubPlace>,
    calls: AtomicUsize,
}

impl StubGeocoder {
    /// Create a geocoder that knows no places.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` to `coordinate`.
    #[must_use]
    pub fn with_place(mut self, name: impl Into<String>, coordinate: Coordinate) -> Self {
        self.places
            .insert(name.into(), StubPlace::Found(coordinate));
        self
    }

    /// Fail lookups of `name` as if the service were down.
    #[must_use]
    pub fn with_outage(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.places
            .insert(name.into(), StubPlace::Unavailable(message.into()));
        self
    }

    /// Number of lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.places.get(place.as_str()) {
            Some(StubPlace::Found(coordinate)) => Ok(*coordinate),
            Some(StubPlace::Unavailable(message)) => {
                Err(GeocodeError::service_unavailable(place, message.clone()))
            }
            None => Err(GeocodeError::not_found(place)),
        }
    }
}

#[derive(Debug, Clone)]
enum StubRoute {
    Fixed(RouteRaw),
    Straight { distance_meters: f64 },
    Error(RouteFetchError),
}

/// Stub [`RouteFetcher`] returning a configured response.
#[derive(Debug)]
pub struct StubRouteFetcher {
    response: StubRoute,
    calls: AtomicUsize,
}

impl StubRouteFetcher {
    /// Return `raw` for every request.
    #[must_use]
    pub fn with_route(raw: RouteRaw) -> Self {
        Self::from_response(StubRoute::Fixed(raw))
    }

    /// Return a two-point path from the requested start to the requested end
    /// with the given length.
    #[must_use]
    pub fn straight(distance_meters: f64) -> Self {
        Self::from_response(StubRoute::Straight { distance_meters })
    }

    /// Return `error` for every request.
    #[must_use]
    pub fn with_error(error: RouteFetchError) -> Self {
        Self::from_response(StubRoute::Error(error))
    }

    const fn from_response(response: StubRoute) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of requests performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteFetcher for StubRouteFetcher {
    fn fetch_route(&self, start: Coordinate, end: Coordinate) -> Result<RouteRaw, RouteFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StubRoute::Fixed(raw) => Ok(raw.clone()),
            StubRoute::Straight { distance_meters } => Ok(RouteRaw {
                distance_meters: *distance_meters,
                encoded_path: encode_path(&[start, end]),
            }),
            StubRoute::Error(error) => Err(error.clone()),
        }
    }
}

/// [`Polyline`] decoder that counts its invocations.
#[derive(Debug, Default)]
pub struct CountingDecoder {
    inner: Polyline,
    calls: AtomicUsize,
}

impl CountingDecoder {
    /// Number of decode calls performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PathDecoder for CountingDecoder {
    fn decode(&self, encoded: &str) -> Vec<Coordinate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.decode(encoded)
    }
}
