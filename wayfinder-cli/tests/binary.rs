//! End-to-end checks of the `wayfinder` binary that never reach the network.

use std::process::{Command, Output};

use rstest::rstest;

fn wayfinder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wayfinder"))
        .args(args)
        .env_remove("WAYFINDER_CMDS_ROUTE_START")
        .env_remove("WAYFINDER_CMDS_ROUTE_DESTINATION")
        .output()
        .expect("run wayfinder binary")
}

#[rstest]
fn empty_place_exits_with_failure() {
    let output = wayfinder(&["route", "", "Berlin"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("enter both a starting place and a destination"),
        "unexpected stderr: {stderr}"
    );
}

#[rstest]
fn missing_destination_names_the_environment_fallback() {
    let output = wayfinder(&["route", "Paris"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("WAYFINDER_CMDS_ROUTE_DESTINATION"),
        "unexpected stderr: {stderr}"
    );
}

#[rstest]
fn unknown_flag_is_a_usage_error() {
    let output = wayfinder(&["route", "Paris", "Berlin", "--no-such-flag"]);

    assert_eq!(output.status.code(), Some(2));
}
