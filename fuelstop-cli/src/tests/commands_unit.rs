//! Request loading and command execution against fixture files.
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point results"
)]

use super::helpers::{ROUTE_MILES, RequestDir, two_station_request, write_utf8};
use super::*;
use crate::args::RunConfig;
use crate::commands::{PlanResponse, execute_plan, execute_project, load_request};
use fuelstop_engine::{PlanError, PlannerConfig};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn request() -> RequestDir {
    let dir = RequestDir::new();
    dir.write_json(&two_station_request());
    dir
}

fn run_config(dir: &RequestDir, planner: PlannerConfig) -> RunConfig {
    RunConfig {
        request_path: dir.request_path.clone(),
        planner,
    }
}

#[rstest]
fn load_request_decodes_json(request: RequestDir) {
    let decoded = load_request(&request.request_path).expect("request should decode");
    assert_eq!(decoded.route.points.len(), 3);
    assert_eq!(decoded.candidates.len(), 3);
}

#[rstest]
fn load_request_rejects_invalid_json() {
    let dir = RequestDir::new();
    write_utf8(&dir.request_path, b"{ not valid json");
    let err = load_request(&dir.request_path).expect_err("invalid json should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, dir.request_path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_request_io_error_returns_open_error() {
    let dir = RequestDir::new();
    let err = load_request(&dir.request_path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, dir.request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn plan_buys_only_at_the_cheap_station(request: RequestDir) {
    let response =
        execute_plan(&run_config(&request, PlannerConfig::default())).expect("feasible plan");
    let ids: Vec<&str> = response
        .plan
        .stops
        .iter()
        .map(|stop| stop.candidate.id.as_str())
        .collect();
    assert_eq!(ids, vec!["cheap"]);
    assert!((response.plan.total_fuel_cost - 100.0).abs() < 1e-6);
    assert!((response.plan.total_gallons - 80.0).abs() < 1e-6);
    assert!((response.plan.total_distance - ROUTE_MILES).abs() < 1e-6);
    assert_eq!(response.waypoints.len(), 3);
}

#[rstest]
fn plan_response_serialises_flat(request: RequestDir) {
    let response =
        execute_plan(&run_config(&request, PlannerConfig::default())).expect("feasible plan");
    let value = serde_json::to_value(&response).expect("serialise response");
    assert!(value.get("total_fuel_cost").is_some());
    assert!(value.get("waypoints").is_some());
    let decoded: PlanResponse = serde_json::from_value(value).expect("decode response");
    assert_eq!(decoded.plan.stops.len(), response.plan.stops.len());
    assert_eq!(decoded.waypoints.len(), response.waypoints.len());
}

#[rstest]
fn short_range_is_reported_as_infeasible(request: RequestDir) {
    let planner = PlannerConfig::default().with_max_range_miles(300.0);
    let err = execute_plan(&run_config(&request, planner)).expect_err("infeasible");
    match err {
        CliError::Plan {
            source: PlanError::InfeasibleRoute { .. },
        } => {}
        other => panic!("expected InfeasibleRoute, found {other:?}"),
    }
}

#[rstest]
fn project_lists_corridor_stations_in_route_order(request: RequestDir) {
    let projected =
        execute_project(&run_config(&request, PlannerConfig::default())).expect("projected");
    let ids: Vec<&str> = projected
        .iter()
        .map(|station| station.candidate.id.as_str())
        .collect();
    assert_eq!(ids, vec!["dear", "cheap"]);
}

#[rstest]
fn wide_corridor_admits_the_off_route_station(request: RequestDir) {
    let planner = PlannerConfig::default().with_max_corridor_width_miles(100.0);
    let projected = execute_project(&run_config(&request, planner)).expect("projected");
    let ids: Vec<&str> = projected
        .iter()
        .map(|station| station.candidate.id.as_str())
        .collect();
    assert_eq!(ids, vec!["dear", "north", "cheap"]);
}

#[rstest]
fn invalid_route_is_reported_with_its_path() {
    let dir = RequestDir::new();
    dir.write_json(&json!({ "route": { "points": [] }, "candidates": [] }));
    let err = execute_plan(&run_config(&dir, PlannerConfig::default()))
        .expect_err("empty route should fail");
    match err {
        CliError::InvalidRequest { path, source } => {
            assert_eq!(path, dir.request_path);
            assert_eq!(source, RequestError::MissingGeometry);
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}
