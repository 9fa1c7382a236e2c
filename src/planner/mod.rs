//! End-to-end planning: project candidates, then choose stops.

use fuelstop_core::{
    Candidate, Plan, PlanError, PlannerConfig, ProjectedCandidate, Projector, Route,
    StopOptimizer,
};
use fuelstop_corridor::CorridorProjector;
use fuelstop_solver_dp::ForwardDpOptimizer;

/// A projector and an optimizer sharing one validated configuration.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_engine::{Candidate, Planner, PlannerConfig, Route};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let route = Route::from_coords_measured(&[
///     Coord { x: -87.63, y: 41.88 },
///     Coord { x: -86.16, y: 39.77 },
/// ])?;
/// let planner = Planner::new(PlannerConfig::default())?;
/// let plan = planner.plan(&route, &[])?;
/// assert!(plan.is_direct());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Planner<P = CorridorProjector, O = ForwardDpOptimizer> {
    projector: P,
    optimizer: O,
    config: PlannerConfig,
}

impl Planner {
    /// Build the default pipeline for `config`.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidConfiguration`] when `config` fails
    /// validation.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        Self::with_components(
            CorridorProjector::from_config(&config),
            ForwardDpOptimizer::new(),
            config,
        )
    }
}

impl<P, O> Planner<P, O>
where
    P: Projector,
    O: StopOptimizer,
{
    /// Build a pipeline from explicit components.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidConfiguration`] when `config` fails
    /// validation.
    pub fn with_components(
        projector: P,
        optimizer: O,
        config: PlannerConfig,
    ) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self {
            projector,
            optimizer,
            config,
        })
    }

    /// Configuration shared by both stages.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Place `candidates` on `route` and keep those inside the corridor.
    #[must_use]
    pub fn project(&self, route: &Route, candidates: &[Candidate]) -> Vec<ProjectedCandidate> {
        self.projector
            .project(route, candidates, &self.config.corridor_limits())
    }

    /// Compute the cheapest refuelling plan for `route`.
    ///
    /// # Errors
    /// Returns [`PlanError::InfeasibleRoute`] when no sequence of stops
    /// covers the route.
    pub fn plan(&self, route: &Route, candidates: &[Candidate]) -> Result<Plan, PlanError> {
        let projected = self.project(route, candidates);
        log::debug!(
            "planning {:.1} mile route with {} of {} candidates in the corridor",
            route.total_distance_miles(),
            projected.len(),
            candidates.len()
        );
        self.optimizer.optimize(
            &projected,
            route.total_distance_miles(),
            &self.config.vehicle(),
        )
    }
}

/// Compute the cheapest refuelling plan with the default pipeline.
///
/// # Errors
/// Returns [`PlanError::InvalidConfiguration`] for an invalid `config` and
/// [`PlanError::InfeasibleRoute`] when the destination cannot be reached.
pub fn optimize(
    route: &Route,
    candidates: &[Candidate],
    config: &PlannerConfig,
) -> Result<Plan, PlanError> {
    Planner::new(*config)?.plan(route, candidates)
}

/// Project candidates onto `route` with the default projector.
///
/// # Errors
/// Returns [`PlanError::InvalidConfiguration`] for an invalid `config`;
/// projection itself never fails.
pub fn project(
    route: &Route,
    candidates: &[Candidate],
    config: &PlannerConfig,
) -> Result<Vec<ProjectedCandidate>, PlanError> {
    Ok(Planner::new(*config)?.project(route, candidates))
}
