//! Great-circle distance and unit helpers.
//!
//! Every point-to-point distance in the engine goes through
//! [`haversine_miles`]. Coordinates are WGS84 degrees with `x = longitude` and
//! `y = latitude`, matching the rest of the crate.
#![expect(
    clippy::float_arithmetic,
    reason = "geodesy is floating-point arithmetic by nature"
)]

use geo::Coord;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Miles per metre.
pub const MILES_PER_METRE: f64 = 0.000_621_371;

/// Metres per statute mile.
pub const METRES_PER_MILE: f64 = 1609.344;

/// Great-circle distance between two coordinates in miles.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::haversine_miles;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 1.0, y: 0.0 };
/// let d = haversine_miles(a, b);
/// assert!((d - 69.09).abs() < 0.01);
/// ```
#[must_use]
pub fn haversine_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let half_dlat = (b.y - a.y).to_radians() / 2.0;
    let half_dlng = (b.x - a.x).to_radians() / 2.0;
    let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlng.sin().powi(2);
    // Rounding can push `h` a hair past 1 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Convert metres to miles.
#[must_use]
pub const fn metres_to_miles(metres: f64) -> f64 {
    metres * MILES_PER_METRE
}

/// Convert miles to metres.
#[must_use]
pub const fn miles_to_metres(miles: f64) -> f64 {
    miles * METRES_PER_MILE
}

/// Running haversine distance from the first coordinate to each coordinate.
///
/// The first entry is always `0.0`; an empty input yields an empty vector.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::cumulative_distances;
///
/// let coords = [
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 1.0, y: 0.0 },
/// ];
/// let distances = cumulative_distances(&coords);
/// assert_eq!(distances.len(), 3);
/// assert_eq!(distances[0], 0.0);
/// assert_eq!(distances[1], 0.0);
/// assert!(distances[2] > 69.0);
/// ```
#[must_use]
pub fn cumulative_distances(coords: &[Coord<f64>]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(coords.len());
    let mut running = 0.0;
    let mut previous: Option<Coord<f64>> = None;
    for &coord in coords {
        if let Some(prev) = previous {
            running += haversine_miles(prev, coord);
        }
        distances.push(running);
        previous = Some(coord);
    }
    distances
}
