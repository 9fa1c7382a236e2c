//! Test-only utilities for `fuelstop-solver-dp`.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use fuelstop_core::test_support::projected;
use fuelstop_core::{ProjectedCandidate, VehicleProfile};

/// Trip length of [`worked_example`], in miles.
pub const WORKED_EXAMPLE_MILES: f64 = 1200.0;

/// Four stations along a 1200-mile trip.
///
/// With a 500-mile range at 10 mpg the cheapest plan buys at miles 400, 700
/// and 1000 for a total of $227.00. Candidate ids are their mile-markers.
///
/// # Examples
/// ```rust
/// use fuelstop_solver_dp::test_support::worked_example;
///
/// let stations = worked_example();
/// assert_eq!(stations.len(), 4);
/// assert_eq!(stations[1].candidate.id, "400");
/// ```
#[must_use]
pub fn worked_example() -> Vec<ProjectedCandidate> {
    vec![
        projected("150", 150.0, 3.00),
        projected("400", 400.0, 2.50),
        projected("700", 700.0, 3.20),
        projected("1000", 1000.0, 2.80),
    ]
}

/// A vehicle with the given range and efficiency.
#[must_use]
pub const fn vehicle(max_range_miles: f64, mpg: f64) -> VehicleProfile {
    VehicleProfile {
        max_range_miles,
        mpg,
    }
}
