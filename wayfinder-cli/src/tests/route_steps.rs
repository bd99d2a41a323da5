//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::{StubPlannerBuilder, scratch_dir};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;
use wayfinder_core::{Endpoint, FindRouteError};

#[derive(Debug)]
struct RouteWorld {
    _tmp: TempDir,
    map_path: Utf8PathBuf,
    places: RefCell<Vec<String>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        let (tmp, root) = scratch_dir();
        Self {
            _tmp: tmp,
            map_path: root.join("route.html"),
            places: RefCell::new(Vec::new()),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["wayfinder".to_owned(), "route".to_owned()];
        argv.extend(self.places.borrow().iter().cloned());
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn assert_succeeded(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }

    fn route_error(&self) -> FindRouteError {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        match error {
            CliError::Route(source) => source.clone(),
            other => panic!("expected a route error, found {other:?}"),
        }
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("I ask for a route from {start:word} to {destination:word}")]
fn ask_for_route(#[from(world)] world: &RouteWorld, start: String, destination: String) {
    world.places.replace(vec![start, destination]);
}

#[given("I ask for a route to {destination:word} with an empty start")]
fn ask_with_empty_start(#[from(world)] world: &RouteWorld, destination: String) {
    world.places.replace(vec![String::new(), destination]);
}

#[given("I request JSON output")]
fn request_json_output(#[from(world)] world: &RouteWorld) {
    world.cli_args.borrow_mut().push(format!("--{ARG_JSON}"));
}

#[given("I request a map file")]
fn request_map_file(#[from(world)] world: &RouteWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_MAP_OUTPUT}"),
        world.map_path.as_str().to_owned(),
    ]);
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &StubPlannerBuilder, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command prints the distance summary")]
fn command_prints_summary(#[from(world)] world: &RouteWorld) {
    world.assert_succeeded();
    assert_eq!(
        world.stdout(),
        "Shortest distance from Paris to Berlin: 1050.00 km\n"
    );
}

#[then("the command prints a JSON report ending at {destination:word}")]
fn command_prints_json_report(#[from(world)] world: &RouteWorld, destination: String) {
    world.assert_succeeded();
    let report: serde_json::Value =
        serde_json::from_str(&world.stdout()).expect("output should be a JSON report");
    assert_eq!(report["plan"]["destination"], destination.as_str());
    assert_eq!(report["map"]["destination_marker"]["label"], destination.as_str());
}

#[then("a map of the route is written")]
fn map_is_written(#[from(world)] world: &RouteWorld) {
    world.assert_succeeded();
    let html = std::fs::read_to_string(&world.map_path).expect("map file should exist");
    assert!(html.contains("L.polyline"));
}

#[then("the command fails asking for both places")]
fn command_fails_missing_input(#[from(world)] world: &RouteWorld) {
    match world.route_error() {
        FindRouteError::MissingInput { which } => assert_eq!(which, Endpoint::Start),
        other => panic!("expected MissingInput, found {other:?}"),
    }
}

#[then("the command fails to geocode the {which:word} place")]
fn command_fails_geocoding(#[from(world)] world: &RouteWorld, which: String) {
    match world.route_error() {
        FindRouteError::GeocodingFailed { which: endpoint, .. } => {
            assert_eq!(endpoint.to_string(), which);
        }
        other => panic!("expected GeocodingFailed, found {other:?}"),
    }
}

#[then("no map is written")]
fn no_map_is_written(#[from(world)] world: &RouteWorld) {
    assert!(!world.map_path.exists());
    assert!(world.stdout.borrow().is_empty());
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_summary, "printing the shortest distance");
register_route_scenario!(route_json, "printing a JSON report");
register_route_scenario!(route_map, "writing a map of the route");
register_route_scenario!(route_empty_start, "rejecting an empty start");
register_route_scenario!(route_unknown_place, "reporting an unknown destination");
