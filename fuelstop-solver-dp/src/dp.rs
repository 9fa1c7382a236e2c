//! Forward dynamic program over route-ordered nodes.
//!
//! Nodes are `[Origin, station₁ … stationₖ, Destination]` in ascending
//! mile-marker order. `cost[j]` is the cheapest spend that reaches node `j`
//! having bought, at each station passed through, exactly the fuel for the
//! next leg. The origin sells nothing: the first leg runs on the starting
//! tank.

use fuelstop_core::{FuelStop, Plan, ProjectedCandidate, VehicleProfile};

/// A position on the route the vehicle may stop at.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Node<'a> {
    /// Route start.
    Origin,
    /// A refuelling station.
    Station(&'a ProjectedCandidate),
    /// Route end at the given mile-marker.
    Destination(f64),
}

impl Node<'_> {
    /// Mile-marker of the node.
    pub(crate) const fn distance(self) -> f64 {
        match self {
            Self::Origin => 0.0,
            Self::Station(candidate) => candidate.distance_from_start,
            Self::Destination(distance) => distance,
        }
    }

    /// Price paid for fuel bought when leaving this node.
    const fn price(self) -> f64 {
        match self {
            Self::Station(candidate) => candidate.price(),
            Self::Origin | Self::Destination(_) => 0.0,
        }
    }
}

/// Cost and parent tables filled by [`solve`].
#[derive(Debug)]
pub(crate) struct DpTable {
    cost: Vec<f64>,
    parent: Vec<Option<usize>>,
}

impl DpTable {
    /// Cheapest spend reaching node `index`, if it is reachable.
    pub(crate) fn cost(&self, index: usize) -> Option<f64> {
        self.cost.get(index).copied().filter(|c| c.is_finite())
    }

    /// Node indices from the origin to `target`, or `None` if unreachable.
    pub(crate) fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.cost(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != 0 {
            current = self.parent.get(current).copied().flatten()?;
            path.push(current);
            if path.len() > self.parent.len() {
                log::warn!("parent chain from node {target} does not reach the origin");
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Fill the cost and parent tables for `nodes`.
///
/// Transitions with a non-positive gap are skipped. Because nodes are sorted,
/// the inner scan stops at the first node beyond one tank of range. Only a
/// strictly cheaper arrival replaces an existing parent, so ties keep the
/// earliest predecessor.
#[expect(
    clippy::float_arithmetic,
    reason = "leg costs are computed in floating point"
)]
pub(crate) fn solve(nodes: &[Node<'_>], vehicle: &VehicleProfile) -> DpTable {
    let mut cost = vec![f64::INFINITY; nodes.len()];
    let mut parent = vec![None; nodes.len()];
    if let Some(origin) = cost.first_mut() {
        *origin = 0.0;
    }

    for (i, from) in nodes.iter().enumerate() {
        let base = cost.get(i).copied().unwrap_or(f64::INFINITY);
        if !base.is_finite() {
            continue;
        }
        for (j, to) in nodes.iter().enumerate().skip(i + 1) {
            let gap = to.distance() - from.distance();
            if gap <= 0.0 {
                continue;
            }
            if gap > vehicle.max_range_miles {
                break;
            }
            let arrival = base + gap / vehicle.mpg * from.price();
            if let (Some(slot), Some(link)) = (cost.get_mut(j), parent.get_mut(j))
                && arrival < *slot
            {
                *slot = arrival;
                *link = Some(i);
            }
        }
    }

    DpTable { cost, parent }
}

/// Turn a node path into a [`Plan`].
///
/// Every leg adds its gallons to the trip total; legs leaving a station also
/// record a [`FuelStop`]. The plan reports `total_distance_miles` as given
/// rather than the summed leg lengths.
#[expect(
    clippy::float_arithmetic,
    reason = "gallons and costs are derived from leg lengths"
)]
pub(crate) fn build_plan(
    nodes: &[Node<'_>],
    path: &[usize],
    vehicle: &VehicleProfile,
    total_distance_miles: f64,
) -> Plan {
    let mut stops = Vec::new();
    let mut total_gallons = 0.0;

    let legs = path
        .iter()
        .zip(path.iter().skip(1))
        .filter_map(|(&i, &j)| Some((*nodes.get(i)?, *nodes.get(j)?)));
    for (from, to) in legs {
        let gap = to.distance() - from.distance();
        let gallons = gap / vehicle.mpg;
        total_gallons += gallons;
        if let Node::Station(candidate) = from {
            stops.push(FuelStop {
                candidate: candidate.candidate.clone(),
                distance_from_start: candidate.distance_from_start,
                price: candidate.price(),
                gallons,
                cost: gallons * candidate.price(),
            });
        }
    }

    Plan::new(stops, total_gallons, total_distance_miles)
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::float_arithmetic,
        reason = "assertions compare floating-point results"
    )]

    use super::*;
    use fuelstop_core::test_support::projected;
    use rstest::rstest;

    const VEHICLE: VehicleProfile = VehicleProfile {
        max_range_miles: 500.0,
        mpg: 10.0,
    };

    #[rstest]
    fn origin_reaches_everything_within_one_tank_for_free() {
        let a = projected("a", 200.0, 3.0);
        let b = projected("b", 600.0, 2.0);
        let nodes = [Node::Origin, Node::Station(&a), Node::Station(&b), Node::Destination(900.0)];
        let table = solve(&nodes, &VEHICLE);
        assert_eq!(table.cost(1), Some(0.0));
        // 400 miles from `a` at $3.00.
        assert!(table.cost(2).is_some_and(|c| (c - 120.0).abs() < 1e-9));
        // Plus 300 miles from `b` at $2.00.
        assert!(table.cost(3).is_some_and(|c| (c - 180.0).abs() < 1e-9));
        assert_eq!(table.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[rstest]
    fn zero_gap_transitions_are_skipped() {
        let a = projected("a", 0.0, 1.0);
        let nodes = [Node::Origin, Node::Station(&a), Node::Destination(100.0)];
        let table = solve(&nodes, &VEHICLE);
        assert_eq!(table.cost(1), None);
        assert_eq!(table.path_to(2), Some(vec![0, 2]));
    }

    #[rstest]
    fn unreachable_destination_has_no_path() {
        let nodes = [Node::Origin, Node::Destination(501.0)];
        let table = solve(&nodes, &VEHICLE);
        assert_eq!(table.cost(1), None);
        assert_eq!(table.path_to(1), None);
    }

    #[rstest]
    fn equal_arrivals_keep_the_earlier_parent() {
        let b = projected("b", 300.0, 2.0);
        let c = projected("c", 300.0, 2.0);
        let nodes = [Node::Origin, Node::Station(&b), Node::Station(&c), Node::Destination(550.0)];
        let table = solve(&nodes, &VEHICLE);
        assert_eq!(table.path_to(3), Some(vec![0, 1, 3]));
    }

    #[rstest]
    fn plan_counts_the_origin_leg_but_does_not_charge_for_it() {
        let a = projected("a", 400.0, 2.5);
        let nodes = [Node::Origin, Node::Station(&a), Node::Destination(700.0)];
        let plan = build_plan(&nodes, &[0, 1, 2], &VEHICLE, 700.0);
        assert_eq!(plan.stops.len(), 1);
        assert!((plan.total_gallons - 70.0).abs() < 1e-9);
        assert!((plan.total_fuel_cost - 75.0).abs() < 1e-9);
        assert!((plan.total_distance - 700.0).abs() < 1e-9);
    }

    #[rstest]
    fn plan_reports_the_route_total_exactly() {
        // Summing these legs gives 951.3999999999999.
        let a = projected("a", 228.8, 3.0);
        let b = projected("b", 901.4, 3.0);
        let c = projected("c", 945.3, 3.0);
        let nodes = [
            Node::Origin,
            Node::Station(&a),
            Node::Station(&b),
            Node::Station(&c),
            Node::Destination(951.4),
        ];
        let plan = build_plan(&nodes, &[0, 1, 2, 3, 4], &VEHICLE, 951.4);
        assert_eq!(plan.total_distance.to_bits(), 951.4_f64.to_bits());
    }
}
