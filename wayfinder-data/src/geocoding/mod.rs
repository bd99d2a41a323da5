//! HTTP geocoding adapter for Nominatim-compatible services.
//!
//! [`HttpGeocoder`] implements [`wayfinder_core::Geocoder`] by querying the
//! `/search` endpoint and taking the first match. Like the routing adapter
//! it blocks on an internal Tokio runtime, so callers stay synchronous.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use wayfinder_core::{Geocoder, PlaceQuery};
//! use wayfinder_data::geocoding::{HttpGeocoder, HttpGeocoderConfig};
//!
//! let config = HttpGeocoderConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0 (ops@example.com)");
//! let geocoder = HttpGeocoder::with_config(config)?;
//!
//! let paris = geocoder.geocode(&PlaceQuery::new("Paris")?)?;
//! println!("Paris is at {}, {}", paris.lat(), paris.lon());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{DEFAULT_NOMINATIM_URL, HttpGeocoder, HttpGeocoderConfig};
