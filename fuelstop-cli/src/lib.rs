//! Command-line interface for the fuelstop refuelling planner.
//!
//! `fuelstop plan <request.json>` prints the cheapest refuelling plan for a
//! route; `fuelstop project <request.json>` prints the candidates that fall
//! inside the corridor with their mile-markers. Vehicle and corridor
//! settings layer from CLI flags, configuration files, and `FUELSTOP_*`
//! environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod args;
mod commands;
mod error;
mod io;
mod request;

pub use error::CliError;
pub use request::RequestError;

use args::{PlanArgs, ProjectArgs};

const ARG_REQUEST: &str = "request";
const ARG_MAX_RANGE: &str = "max-range";
const ARG_MPG: &str = "mpg";
const ARG_CORRIDOR_WIDTH: &str = "corridor-width";
const ARG_STRATEGY: &str = "strategy";
const ENV_PLAN_REQUEST: &str = "FUELSTOP_CMDS_PLAN_REQUEST_PATH";
const ENV_PROJECT_REQUEST: &str = "FUELSTOP_CMDS_PROJECT_REQUEST_PATH";

/// Run the fuelstop CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, request
/// loading, planning, or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => commands::run_plan_with(args, &mut stdout),
        Command::Project(args) => commands::run_project_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fuelstop",
    about = "Plan the cheapest refuelling stops along a route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose refuelling stops for a route.
    Plan(PlanArgs),
    /// List the candidates inside the route corridor.
    Project(ProjectArgs),
}

#[cfg(test)]
mod tests;
