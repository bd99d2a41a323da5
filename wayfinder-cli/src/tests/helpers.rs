//! Stub planners and scratch directories shared by the CLI tests.

use super::*;
use camino::Utf8PathBuf;
use tempfile::TempDir;
use wayfinder_core::test_support::{StubGeocoder, StubRouteFetcher};
use wayfinder_core::{Coordinate, RouteFinder, RoutePlanner};

pub(super) const PARIS: &str = "Paris";
pub(super) const BERLIN: &str = "Berlin";
pub(super) const PARIS_TO_BERLIN_METRES: f64 = 1_050_000.0;

/// Builds a finder that knows Paris and Berlin and joins them in a straight
/// line of [`PARIS_TO_BERLIN_METRES`].
#[derive(Debug, Default)]
pub(super) struct StubPlannerBuilder;

impl RoutePlannerBuilder for StubPlannerBuilder {
    fn build(&self, _config: &RouteConfig) -> Result<Box<dyn RoutePlanner>, CliError> {
        let geocoder = StubGeocoder::new()
            .with_place(
                PARIS,
                Coordinate::new(48.8566, 2.3522).expect("valid coordinate"),
            )
            .with_place(
                BERLIN,
                Coordinate::new(52.52, 13.405).expect("valid coordinate"),
            );
        let router = StubRouteFetcher::straight(PARIS_TO_BERLIN_METRES);
        Ok(Box::new(RouteFinder::new(geocoder, router)))
    }
}

pub(super) fn scratch_dir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn route_args(start: &str, destination: &str) -> RouteArgs {
    RouteArgs {
        start: Some(start.to_owned()),
        destination: Some(destination.to_owned()),
        ..RouteArgs::default()
    }
}
