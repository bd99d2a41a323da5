//! Facade crate for the Wayfinder route finder.
//!
//! This crate re-exports the core domain types and exposes the HTTP
//! geocoding and routing adapters behind the `http` feature flag.

#![forbid(unsafe_code)]

pub use wayfinder_core::{
    Coordinate, CoordinateError, DEFAULT_PRECISION, DEFAULT_ZOOM, Endpoint, FindRouteError,
    GeocodeError, Geocoder, MAX_PRECISION, METRES_PER_KILOMETRE, MapView, Marker, MarkerColour,
    PathDecoder, PlaceQuery, PlaceQueryError, Polyline, PolylineError, RouteFetchError,
    RouteFetcher, RouteFinder, RoutePlan, RoutePlanner, RouteRaw, RouteResult, RouteResultError,
    decode_path, encode_path,
};

#[cfg(feature = "http")]
pub use wayfinder_data::{
    ProviderBuildError,
    geocoding::{HttpGeocoder, HttpGeocoderConfig},
    routing::{HttpRouteFetcher, HttpRouteFetcherConfig},
};
