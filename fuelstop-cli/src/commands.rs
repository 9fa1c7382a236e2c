//! `plan` and `project` command implementations.

use camino::Utf8Path;
use fuelstop_engine::{Candidate, Plan, Planner, ProjectedCandidate, Route};
use geo::Coord;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::CliError;
use crate::args::{PlanArgs, ProjectArgs, RunConfig};
use crate::io::open_utf8_file;
use crate::request::PlanRequest;

/// Output of the `plan` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanResponse {
    #[serde(flatten)]
    pub(crate) plan: Plan,
    /// Route start, each chosen stop, then the route end.
    pub(crate) waypoints: Vec<Coord<f64>>,
}

impl PlanResponse {
    fn new(plan: Plan, route: &Route) -> Self {
        let waypoints = route
            .start()
            .zip(route.end())
            .map(|(origin, destination)| plan.waypoints(origin.location, destination.location))
            .unwrap_or_default();
        Self { plan, waypoints }
    }
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let response = execute_plan(&config)?;
    write_json(writer, &response)
}

pub(crate) fn run_project_with(args: ProjectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let projected = execute_project(&config)?;
    write_json(writer, &projected)
}

pub(crate) fn execute_plan(config: &RunConfig) -> Result<PlanResponse, CliError> {
    let (route, candidates) = load_inputs(&config.request_path)?;
    let planner = Planner::new(config.planner).map_err(|source| CliError::Plan { source })?;
    let plan = planner
        .plan(&route, &candidates)
        .map_err(|source| CliError::Plan { source })?;
    log::info!(
        "{} stops over {:.1} miles, total cost {:.2}",
        plan.stops.len(),
        plan.total_distance,
        plan.total_fuel_cost
    );
    Ok(PlanResponse::new(plan, &route))
}

pub(crate) fn execute_project(config: &RunConfig) -> Result<Vec<ProjectedCandidate>, CliError> {
    let (route, candidates) = load_inputs(&config.request_path)?;
    let planner = Planner::new(config.planner).map_err(|source| CliError::Plan { source })?;
    Ok(planner.project(&route, &candidates))
}

/// Loads a JSON-encoded request from disk.
pub(crate) fn load_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn load_inputs(path: &Utf8Path) -> Result<(Route, Vec<Candidate>), CliError> {
    let request = load_request(path)?;
    let inputs = request
        .into_inputs()
        .map_err(|source| CliError::InvalidRequest {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!(
        "loaded a {}-point route and {} candidates from {path}",
        inputs.0.len(),
        inputs.1.len()
    );
    Ok(inputs)
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
