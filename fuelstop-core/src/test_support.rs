//! Fixture builders shared by unit, behaviour and property tests.
//!
//! Routes built here run along the equator where one degree of longitude is
//! a constant number of miles, which keeps expected mile-markers easy to
//! reason about.
#![expect(
    clippy::float_arithmetic,
    reason = "fixture geometry is computed in floating point"
)]

use geo::Coord;

use crate::{Candidate, EARTH_RADIUS_MILES, ProjectedCandidate, Route, RouteError};

/// Miles spanned by one degree of longitude on the equator.
#[must_use]
pub const fn miles_per_equator_degree() -> f64 {
    EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0
}

/// Longitude reached after travelling `miles` east from `(0, 0)`.
#[must_use]
pub const fn equator_longitude(miles: f64) -> f64 {
    miles / miles_per_equator_degree()
}

/// A straight eastbound route along the equator.
///
/// The route starts at `(0, 0)`, has `points` evenly spaced vertices and
/// measures `miles` in total.
///
/// # Errors
/// Returns [`RouteError`] when `points < 2` or `miles` is not positive.
pub fn equator_route(miles: f64, points: u32) -> Result<Route, RouteError> {
    let segments = f64::from(points.saturating_sub(1).max(1));
    let coords: Vec<Coord<f64>> = (0..points)
        .map(|i| Coord {
            x: equator_longitude(miles * f64::from(i) / segments),
            y: 0.0,
        })
        .collect();
    Route::from_coords_measured(&coords)
}

/// A candidate at the given latitude and longitude.
#[must_use]
pub fn candidate(id: &str, lat: f64, lng: f64, price: f64) -> Candidate {
    Candidate::new(id, format!("Station {id}"), Coord { x: lng, y: lat }, price)
}

/// A candidate sitting on the equator route at `miles` from the start.
#[must_use]
pub fn candidate_at_mile(id: &str, miles: f64, price: f64) -> Candidate {
    candidate(id, 0.0, equator_longitude(miles), price)
}

/// A candidate already placed at `distance` miles along a route.
#[must_use]
pub fn projected(id: &str, distance: f64, price: f64) -> ProjectedCandidate {
    ProjectedCandidate::new(candidate(id, 40.0, -90.0, price), distance, 0.0)
}
