//! Shared test harness modules for the Wayfinder CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::route::{
    DefaultRoutePlannerBuilder, OutputFormat, RouteConfig, RoutePlannerBuilder,
    config_from_layers_for_test, run_route_with,
};

mod helpers;
mod route_steps;
