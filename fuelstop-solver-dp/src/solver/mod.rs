//! `ForwardDpOptimizer`: the default [`StopOptimizer`].

use fuelstop_core::{
    Plan, PlanError, ProjectedCandidate, RouteError, StopOptimizer, VehicleProfile,
};

use crate::dp::{self, Node};

/// Minimum-cost refuelling planner using a forward dynamic program.
///
/// The optimizer holds no state; one instance can serve any number of
/// threads.
///
/// # Examples
/// ```
/// use fuelstop_core::{StopOptimizer, VehicleProfile};
/// use fuelstop_solver_dp::ForwardDpOptimizer;
///
/// let plan = ForwardDpOptimizer::new()
///     .optimize(&[], 320.0, &VehicleProfile::default())
///     .expect("a short trip needs no stops");
/// assert!(plan.is_direct());
/// assert_eq!(plan.total_gallons, 32.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardDpOptimizer;

impl ForwardDpOptimizer {
    /// Construct the optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StopOptimizer for ForwardDpOptimizer {
    fn optimize(
        &self,
        candidates: &[ProjectedCandidate],
        total_distance_miles: f64,
        vehicle: &VehicleProfile,
    ) -> Result<Plan, PlanError> {
        optimize_stops(candidates, total_distance_miles, vehicle)
    }
}

/// Compute the cheapest refuelling plan for a trip of `total_distance_miles`.
///
/// `candidates` should be sorted by `distance_from_start`; unsorted input is
/// sorted stably first. Candidates with non-finite data or a position outside
/// `[0, total_distance_miles]` are ignored.
///
/// # Errors
/// - [`PlanError::InvalidConfiguration`] when range or mpg is not positive.
/// - [`PlanError::EmptyRoute`] when the trip length is not positive.
/// - [`PlanError::InfeasibleRoute`] when some gap between consecutive usable
///   nodes exceeds the tank range.
///
/// # Examples
/// ```
/// use fuelstop_core::VehicleProfile;
/// use fuelstop_core::test_support::projected;
/// use fuelstop_solver_dp::optimize_stops;
///
/// let stations = [projected("cheap", 400.0, 2.5), projected("dear", 450.0, 3.5)];
/// let plan = optimize_stops(&stations, 700.0, &VehicleProfile::default()).unwrap();
/// assert_eq!(plan.stops.len(), 1);
/// assert_eq!(plan.stops[0].candidate.id, "cheap");
/// assert_eq!(plan.total_fuel_cost, 75.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the direct plan burns distance / mpg gallons"
)]
pub fn optimize_stops(
    candidates: &[ProjectedCandidate],
    total_distance_miles: f64,
    vehicle: &VehicleProfile,
) -> Result<Plan, PlanError> {
    vehicle.validate()?;
    if !total_distance_miles.is_finite() || total_distance_miles <= 0.0 {
        return Err(RouteError::NonPositiveTotalDistance {
            total_distance_miles,
        }
        .into());
    }

    if total_distance_miles <= vehicle.max_range_miles {
        log::debug!("{total_distance_miles} miles fits in one tank; no stops needed");
        return Ok(Plan::new(
            Vec::new(),
            total_distance_miles / vehicle.mpg,
            total_distance_miles,
        ));
    }

    let nodes = build_nodes(candidates, total_distance_miles);
    let table = dp::solve(&nodes, vehicle);
    let destination = nodes.len().saturating_sub(1);
    let Some(path) = table.path_to(destination) else {
        log::warn!(
            "no refuelling sequence covers {total_distance_miles} miles with a {} mile range",
            vehicle.max_range_miles
        );
        return Err(PlanError::InfeasibleRoute {
            max_range_miles: vehicle.max_range_miles,
            total_distance_miles,
        });
    };

    let plan = dp::build_plan(&nodes, &path, vehicle, total_distance_miles);
    log::debug!(
        "planned {} stops over {} nodes, total cost {:.2}",
        plan.stops.len(),
        nodes.len(),
        plan.total_fuel_cost
    );
    Ok(plan)
}

fn build_nodes(candidates: &[ProjectedCandidate], total_distance_miles: f64) -> Vec<Node<'_>> {
    let mut stations: Vec<&ProjectedCandidate> = candidates
        .iter()
        .filter(|candidate| {
            let usable = is_usable(candidate, total_distance_miles);
            if !usable {
                log::debug!(
                    "ignoring candidate {} at {} miles",
                    candidate.candidate.id,
                    candidate.distance_from_start
                );
            }
            usable
        })
        .collect();
    stations.sort_by(|lhs, rhs| lhs.distance_from_start.total_cmp(&rhs.distance_from_start));

    let mut nodes = Vec::with_capacity(stations.len() + 2);
    nodes.push(Node::Origin);
    nodes.extend(stations.into_iter().map(Node::Station));
    nodes.push(Node::Destination(total_distance_miles));
    nodes
}

fn is_usable(candidate: &ProjectedCandidate, total_distance_miles: f64) -> bool {
    let distance = candidate.distance_from_start;
    distance.is_finite()
        && candidate.price().is_finite()
        && (0.0..=total_distance_miles).contains(&distance)
}
