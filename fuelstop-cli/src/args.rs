//! Layered arguments for the `plan` and `project` subcommands.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fuelstop_engine::{PlannerConfig, ProjectionStrategy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CORRIDOR_WIDTH, ARG_MAX_RANGE, ARG_MPG, ARG_REQUEST, ARG_STRATEGY, CliError,
    ENV_PLAN_REQUEST, ENV_PROJECT_REQUEST, io,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Choose the cheapest set of refuelling stops for a route. \
                 The request is a JSON file holding the route geometry and \
                 the candidate stations; vehicle settings come from flags, \
                 configuration files, or environment variables.",
    about = "Plan refuelling stops for a route"
)]
#[ortho_config(prefix = "FUELSTOP")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file with the route and candidate stations.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Distance covered by a full tank, in miles.
    #[arg(long = ARG_MAX_RANGE, value_name = "miles")]
    #[serde(default)]
    pub(crate) max_range: Option<f64>,
    /// Fuel efficiency in miles per gallon.
    #[arg(long = ARG_MPG, value_name = "mpg")]
    #[serde(default)]
    pub(crate) mpg: Option<f64>,
    /// Maximum distance of a station from the route, in miles.
    #[arg(long = ARG_CORRIDOR_WIDTH, value_name = "miles")]
    #[serde(default)]
    pub(crate) corridor_width: Option<f64>,
    /// Projection strategy: `segment` or `nearest-point`.
    #[arg(long = ARG_STRATEGY, value_name = "strategy")]
    #[serde(default)]
    pub(crate) strategy: Option<ProjectionStrategy>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<RunConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RunConfig::try_from(merged)
    }
}

/// CLI arguments for the `project` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Project candidate stations onto a route and list those \
                 inside the corridor, ordered by their distance from the \
                 start. Useful for checking corridor settings before \
                 planning.",
    about = "List the stations inside the route corridor"
)]
#[ortho_config(prefix = "FUELSTOP")]
pub(crate) struct ProjectArgs {
    /// Path to a JSON file with the route and candidate stations.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Stations beyond this many miles from the start are dropped.
    #[arg(long = ARG_MAX_RANGE, value_name = "miles")]
    #[serde(default)]
    pub(crate) max_range: Option<f64>,
    /// Maximum distance of a station from the route, in miles.
    #[arg(long = ARG_CORRIDOR_WIDTH, value_name = "miles")]
    #[serde(default)]
    pub(crate) corridor_width: Option<f64>,
    /// Projection strategy: `segment` or `nearest-point`.
    #[arg(long = ARG_STRATEGY, value_name = "strategy")]
    #[serde(default)]
    pub(crate) strategy: Option<ProjectionStrategy>,
}

impl ProjectArgs {
    pub(crate) fn into_config(self) -> Result<RunConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RunConfig::try_from(merged)
    }
}

/// Resolved configuration shared by both subcommands.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RunConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Planner settings after applying overrides to the defaults.
    pub(crate) planner: PlannerConfig,
}

impl RunConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match io::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Planner settings a subcommand may override.
#[derive(Debug, Default)]
struct Overrides {
    max_range: Option<f64>,
    mpg: Option<f64>,
    corridor_width: Option<f64>,
    strategy: Option<ProjectionStrategy>,
}

impl Overrides {
    fn resolve(
        self,
        path: Option<Utf8PathBuf>,
        env: &'static str,
    ) -> Result<RunConfig, CliError> {
        let request_path = path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env,
        })?;
        let planner = self.apply(PlannerConfig::default());
        planner.validate().map_err(CliError::InvalidConfiguration)?;
        Ok(RunConfig {
            request_path,
            planner,
        })
    }

    const fn apply(self, base: PlannerConfig) -> PlannerConfig {
        let mut config = base;
        if let Some(miles) = self.max_range {
            config = config.with_max_range_miles(miles);
        }
        if let Some(mpg) = self.mpg {
            config = config.with_mpg(mpg);
        }
        if let Some(miles) = self.corridor_width {
            config = config.with_max_corridor_width_miles(miles);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        config
    }
}

impl TryFrom<PlanArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let overrides = Overrides {
            max_range: args.max_range,
            mpg: args.mpg,
            corridor_width: args.corridor_width,
            strategy: args.strategy,
        };
        overrides.resolve(args.request_path, ENV_PLAN_REQUEST)
    }
}

impl TryFrom<ProjectArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: ProjectArgs) -> Result<Self, Self::Error> {
        let overrides = Overrides {
            max_range: args.max_range,
            corridor_width: args.corridor_width,
            strategy: args.strategy,
            ..Overrides::default()
        };
        overrides.resolve(args.request_path, ENV_PROJECT_REQUEST)
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RunConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RunConfig::try_from(merged)
}
