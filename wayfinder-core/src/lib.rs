//! Core domain types for the Wayfinder route finder.
//!
//! The crate turns two free-text place names into a driving route:
//!
//! - [`Geocoder`] resolves a [`PlaceQuery`] to a [`Coordinate`].
//! - [`RouteFetcher`] asks a routing service for a [`RouteRaw`] between two
//!   coordinates.
//! - [`PathDecoder`] (by default [`Polyline`]) expands the encoded geometry
//!   into an ordered path.
//! - [`RouteFinder`] sequences the three and yields a [`RoutePlan`] or a
//!   [`FindRouteError`].
//! - [`MapView`] turns a plan into a renderer-agnostic map description.
//!
//! No network I/O happens here; concrete providers live in `wayfinder-data`.
//! Models validate on construction so a [`RouteResult`] is never partial.

mod coordinate;
mod finder;
mod geocode;
mod map;
mod place;
mod polyline;
mod route;
mod routing;

#[doc(hidden)]
pub mod test_support;

pub use coordinate::{Coordinate, CoordinateError};
pub use finder::{Endpoint, FindRouteError, RouteFinder, RoutePlanner};
pub use geocode::{GeocodeError, Geocoder};
pub use map::{DEFAULT_ZOOM, MapView, Marker, MarkerColour};
pub use place::{PlaceQuery, PlaceQueryError};
pub use polyline::{
    DEFAULT_PRECISION, MAX_PRECISION, PathDecoder, Polyline, PolylineError, decode_path, encode_path,
};
pub use route::{METRES_PER_KILOMETRE, RoutePlan, RouteRaw, RouteResult, RouteResultError};
pub use routing::{RouteFetchError, RouteFetcher};
