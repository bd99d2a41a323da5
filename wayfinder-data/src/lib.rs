//! HTTP adapters for the Wayfinder route finder.
//!
//! Responsibilities:
//! - Resolve place names through a Nominatim-compatible geocoding service.
//! - Fetch driving routes from an OSRM-compatible routing service.
//! - Translate transport and payload failures into the domain errors
//!   defined in `wayfinder-core`.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `wayfinder-core`).
//! - Each call issues exactly one request. Nothing is retried or cached.
//!
//! Invariants:
//! - Provider traits stay synchronous; adapters block on an internal
//!   runtime so callers need not be async.
//! - No global mutable state.

use std::time::Duration;

mod error;
pub mod geocoding;
pub mod routing;
mod runtime;

pub use error::ProviderBuildError;

/// Default user agent sent to geocoding and routing services.
pub const DEFAULT_USER_AGENT: &str = "wayfinder/0.1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
