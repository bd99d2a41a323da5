//! OSRM API response types for the Route service.
//!
//! This module provides deserialisation types for the OSRM Route API
//! response format. The Route API finds the fastest route between the
//! supplied coordinates, in order.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// Successful responses carry `code: "Ok"` and a `routes` array; failures
/// carry another `code` and usually a `message`. Every field is optional so
/// that partial or proxy-generated bodies still decode.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route found between the coordinates
    /// - `"NoSegment"` - A coordinate could not be snapped to the network
    /// - `"InvalidQuery"` - Invalid query parameters
    #[serde(default)]
    pub code: Option<String>,

    /// Optional error message when `code` is not `"Ok"`.
    #[serde(default)]
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Option<Vec<RouteCandidate>>,
}

/// A single candidate route.
#[derive(Debug, Deserialize)]
pub struct RouteCandidate {
    /// Route length in metres.
    pub distance: f64,

    /// Route geometry as an encoded polyline (precision 5).
    pub geometry: String,

    /// Estimated travel time in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    ///
    /// A missing code is treated as success so that the `routes` array
    /// decides the outcome.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.as_deref().is_none_or(|code| code == "Ok")
    }

    /// Describe a failed response from its code and message.
    #[must_use]
    pub fn failure_message(&self) -> String {
        match (self.code.as_deref(), self.message.as_deref()) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            (Some(code), None) => code.to_owned(),
            (None, Some(message)) => message.to_owned(),
            (None, None) => "routing service reported a failure".to_owned(),
        }
    }
}
