//! Seams between the projection engine and the stop optimizer.
//!
//! The optimizer only ever sees [`ProjectedCandidate`] values, so either side
//! can be replaced without touching the other.

use crate::{
    Candidate, CorridorLimits, Plan, PlanError, ProjectedCandidate, Route, VehicleProfile,
};

/// Place candidates on a route's mile-marker axis.
///
/// Implementations must return candidates sorted ascending by
/// `distance_from_start`, keeping input order for equal distances, and must
/// drop candidates outside `limits` rather than returning placeholders.
/// Projectors must be `Send + Sync` so one instance can serve many threads.
///
/// # Examples
/// ```
/// use fuelstop_core::{Candidate, CorridorLimits, ProjectedCandidate, Projector, Route};
///
/// struct StartProjector;
///
/// impl Projector for StartProjector {
///     fn project(
///         &self,
///         _route: &Route,
///         candidates: &[Candidate],
///         _limits: &CorridorLimits,
///     ) -> Vec<ProjectedCandidate> {
///         candidates
///             .iter()
///             .cloned()
///             .map(|c| ProjectedCandidate::new(c, 0.0, 0.0))
///             .collect()
///     }
/// }
/// ```
pub trait Projector: Send + Sync {
    /// Project, filter and sort `candidates` against `route`.
    fn project(
        &self,
        route: &Route,
        candidates: &[Candidate],
        limits: &CorridorLimits,
    ) -> Vec<ProjectedCandidate>;
}

/// Choose refuelling stops along a route.
///
/// Implementations should return [`PlanError::InfeasibleRoute`] when the
/// destination cannot be reached and never a partial plan.
pub trait StopOptimizer: Send + Sync {
    /// Compute a plan for `candidates` sorted by `distance_from_start`.
    ///
    /// # Errors
    /// Returns [`PlanError`] for invalid vehicle parameters or an
    /// unreachable destination.
    fn optimize(
        &self,
        candidates: &[ProjectedCandidate],
        total_distance_miles: f64,
        vehicle: &VehicleProfile,
    ) -> Result<Plan, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use rstest::rstest;

    struct DummyOptimizer;

    impl StopOptimizer for DummyOptimizer {
        fn optimize(
            &self,
            candidates: &[ProjectedCandidate],
            total_distance_miles: f64,
            vehicle: &VehicleProfile,
        ) -> Result<Plan, PlanError> {
            vehicle.validate()?;
            if candidates.is_empty() && total_distance_miles > vehicle.max_range_miles {
                return Err(PlanError::InfeasibleRoute {
                    max_range_miles: vehicle.max_range_miles,
                    total_distance_miles,
                });
            }
            Ok(Plan::new(Vec::new(), 0.0, total_distance_miles))
        }
    }

    #[rstest]
    #[case(400.0, true)]
    #[case(600.0, false)]
    fn optimizer_reports_feasibility(#[case] distance: f64, #[case] feasible: bool) {
        let result = DummyOptimizer.optimize(&[], distance, &VehicleProfile::default());
        assert_eq!(result.is_ok(), feasible);
    }

    #[rstest]
    fn configuration_errors_convert_into_plan_errors() {
        let vehicle = VehicleProfile {
            max_range_miles: 500.0,
            mpg: 0.0,
        };
        let err = DummyOptimizer
            .optimize(&[], 100.0, &vehicle)
            .expect_err("invalid mpg");
        assert_eq!(
            err,
            PlanError::InvalidConfiguration(ConfigError::NonPositiveMpg(0.0))
        );
    }
}
