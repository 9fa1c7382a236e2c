//! Refuelling plans produced by a [`StopOptimizer`](crate::StopOptimizer).

use geo::Coord;

use crate::Candidate;

/// A single purchase along the route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelStop {
    /// Station at which fuel is bought.
    pub candidate: Candidate,
    /// Station position along the route, in miles.
    pub distance_from_start: f64,
    /// Price per gallon paid.
    pub price: f64,
    /// Gallons bought, enough to reach the next chosen stop.
    pub gallons: f64,
    /// Cost of this purchase.
    pub cost: f64,
}

/// The cheapest refuelling plan for a route.
///
/// A plan without stops is valid: the vehicle completes the trip on the tank
/// it departs with.
///
/// # Examples
/// ```
/// use fuelstop_core::Plan;
///
/// let plan = Plan::new(Vec::new(), 30.0, 300.0);
/// assert!(plan.is_direct());
/// assert_eq!(plan.total_fuel_cost, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Purchases in driving order.
    pub stops: Vec<FuelStop>,
    /// Sum of all purchase costs.
    pub total_fuel_cost: f64,
    /// Fuel consumed over the whole trip, including the starting tank.
    pub total_gallons: f64,
    /// Distance covered by the plan's legs, in miles.
    pub total_distance: f64,
}

impl Plan {
    /// Assemble a plan, summing the stop costs.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "costs are summed in floating point")]
    pub fn new(stops: Vec<FuelStop>, total_gallons: f64, total_distance: f64) -> Self {
        let total_fuel_cost = stops.iter().fold(0.0, |acc, stop| acc + stop.cost);
        Self {
            stops,
            total_fuel_cost,
            total_gallons,
            total_distance,
        }
    }

    /// Whether the trip needs no refuelling.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        self.stops.is_empty()
    }

    /// Ordered coordinates `[origin, stop₁, …, stopₖ, destination]`.
    ///
    /// Suitable as the waypoint list for a follow-up routing request that
    /// includes the detours to each chosen station.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use fuelstop_core::{Candidate, FuelStop, Plan};
    ///
    /// let station = Candidate::new("1", "Stop", Coord { x: 1.0, y: 0.0 }, 3.0);
    /// let stop = FuelStop {
    ///     candidate: station,
    ///     distance_from_start: 69.0,
    ///     price: 3.0,
    ///     gallons: 7.0,
    ///     cost: 21.0,
    /// };
    /// let plan = Plan::new(vec![stop], 14.0, 140.0);
    /// let waypoints = plan.waypoints(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 });
    /// assert_eq!(waypoints.len(), 3);
    /// assert_eq!(waypoints[1], Coord { x: 1.0, y: 0.0 });
    /// ```
    #[must_use]
    pub fn waypoints(&self, origin: Coord<f64>, destination: Coord<f64>) -> Vec<Coord<f64>> {
        std::iter::once(origin)
            .chain(self.stops.iter().map(|stop| stop.candidate.location))
            .chain(std::iter::once(destination))
            .collect()
    }
}
