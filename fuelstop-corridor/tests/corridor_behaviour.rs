//! Behavioural tests for `CorridorProjector` using rstest-bdd.

use std::cell::{Cell, RefCell};

use fuelstop_core::test_support::{candidate, candidate_at_mile, equator_longitude, equator_route};
use fuelstop_core::{
    Candidate, PlannerConfig, ProjectedCandidate, ProjectionStrategy, Projector, Route,
};
use fuelstop_corridor::CorridorProjector;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct CorridorWorld {
    route: RefCell<Option<Route>>,
    stations: RefCell<Vec<Candidate>>,
    corridor_width: Cell<Option<f64>>,
    projected: RefCell<Vec<ProjectedCandidate>>,
}

#[fixture]
fn world() -> CorridorWorld {
    CorridorWorld::default()
}

#[given("a {miles} mile route along the equator")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_route(world: &CorridorWorld, miles: f64) {
    let route = equator_route(miles, 11).expect("valid equator route");
    world.route.replace(Some(route));
}

#[given("a station {miles} miles along the route")]
fn given_station_on_route(world: &CorridorWorld, miles: f64) {
    let id = world.stations.borrow().len().to_string();
    world
        .stations
        .borrow_mut()
        .push(candidate_at_mile(&id, miles, 3.0));
}

#[given("a station {miles} miles north of the route")]
fn given_station_off_route(world: &CorridorWorld, miles: f64) {
    let id = world.stations.borrow().len().to_string();
    // A degree of latitude spans the same miles as a degree of equator.
    let lat = equator_longitude(miles);
    world
        .stations
        .borrow_mut()
        .push(candidate(&id, lat, equator_longitude(300.0), 3.0));
}

#[given("a corridor width of {miles} miles")]
fn given_corridor_width(world: &CorridorWorld, miles: f64) {
    world.corridor_width.set(Some(miles));
}

#[when("the stations are projected with the {strategy} strategy")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_projected(world: &CorridorWorld, strategy: String) {
    let strategy: ProjectionStrategy = strategy.parse().expect("known strategy");
    let mut config = PlannerConfig::default().with_strategy(strategy);
    if let Some(width) = world.corridor_width.get() {
        config = config.with_max_corridor_width_miles(width);
    }
    let route = world.route.borrow();
    let route = route.as_ref().expect("route should be set");
    let projected = CorridorProjector::from_config(&config).project(
        route,
        &world.stations.borrow(),
        &config.corridor_limits(),
    );
    world.projected.replace(projected);
}

#[then("{count} station is kept")]
fn then_one_kept(world: &CorridorWorld, count: usize) {
    assert_eq!(world.projected.borrow().len(), count);
}

#[then("{count} stations are kept")]
fn then_many_kept(world: &CorridorWorld, count: usize) {
    assert_eq!(world.projected.borrow().len(), count);
}

#[then("the first station sits {miles} miles from the start")]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point results"
)]
fn then_first_marker(world: &CorridorWorld, miles: f64) {
    let projected = world.projected.borrow();
    let first = projected.first().map(|p| p.distance_from_start);
    assert!(
        first.is_some_and(|d| (d - miles).abs() < 1e-3),
        "expected first station at {miles}, found {first:?}"
    );
}

#[scenario(path = "tests/features/corridor_projection.feature", index = 0)]
fn station_beside_highway(world: CorridorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/corridor_projection.feature", index = 1)]
fn distant_station(world: CorridorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/corridor_projection.feature", index = 2)]
fn nearest_point_snaps(world: CorridorWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/corridor_projection.feature", index = 3)]
fn station_past_range(world: CorridorWorld) {
    let _ = world;
}
