//! HTTP-based route fetching for OSRM-compatible routing services.
//!
//! This module provides [`HttpRouteFetcher`], an implementation of
//! [`wayfinder_core::RouteFetcher`] that requests a single driving route
//! from the OSRM Route API.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use wayfinder_core::{Coordinate, RouteFetcher};
//! use wayfinder_data::routing::{HttpRouteFetcher, HttpRouteFetcherConfig};
//!
//! // Create a fetcher with custom configuration
//! let config = HttpRouteFetcherConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let fetcher = HttpRouteFetcher::with_config(config)?;
//!
//! let paris = Coordinate::new(48.8566, 2.3522)?;
//! let berlin = Coordinate::new(52.52, 13.405)?;
//! let raw = fetcher.fetch_route(paris, berlin)?;
//! println!("{} m", raw.distance_meters);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

pub use provider::{DEFAULT_OSRM_URL, HttpRouteFetcher, HttpRouteFetcherConfig};
