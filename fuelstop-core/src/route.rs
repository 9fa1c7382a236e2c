//! Validated route geometry in mile-marker space.
//!
//! A [`Route`] is the fixed path supplied by the routing collaborator: an
//! ordered list of [`RoutePoint`] values, each carrying its cumulative driving
//! distance, plus the total distance reported for the whole trip.

use geo::Coord;
use thiserror::Error;

use crate::geodesy::cumulative_distances;
use crate::polyline::{PolylineError, decode_polyline};

/// A vertex of the route polyline with its cumulative distance.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::RoutePoint;
///
/// let point = RoutePoint::new(Coord { x: -87.6, y: 41.9 }, 12.5);
/// assert_eq!(point.distance_from_start, 12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    /// WGS84 position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Driving distance from the route start in miles.
    pub distance_from_start: f64,
}

impl RoutePoint {
    /// Construct a route point.
    #[must_use]
    pub const fn new(location: Coord<f64>, distance_from_start: f64) -> Self {
        Self {
            location,
            distance_from_start,
        }
    }
}

/// Errors returned when route geometry violates its preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Fewer than two points were supplied.
    #[error("route must contain at least two points, found {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },
    /// A coordinate or cumulative distance was NaN or infinite.
    #[error("route point {index} has a non-finite coordinate or distance")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },
    /// Cumulative distance decreased between consecutive points.
    #[error("cumulative distance decreases at route point {index}")]
    DecreasingDistance {
        /// Index of the first point whose distance is lower than its predecessor.
        index: usize,
    },
    /// The cumulative distance never advances past the first point.
    #[error("route has zero length")]
    ZeroLength,
    /// The reported total distance was zero, negative or not finite.
    #[error("total route distance must be positive, found {total_distance_miles}")]
    NonPositiveTotalDistance {
        /// Reported total distance in miles.
        total_distance_miles: f64,
    },
    /// The encoded geometry could not be decoded.
    #[error("failed to decode route polyline: {0}")]
    Polyline(#[from] PolylineError),
}

/// An ordered route with monotonically non-decreasing cumulative distances.
///
/// Consecutive points may share a cumulative distance (duplicate polyline
/// vertices are common in provider output) but the distance may never
/// decrease.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::{Route, RoutePoint};
///
/// # fn main() -> Result<(), fuelstop_core::RouteError> {
/// let route = Route::new(
///     vec![
///         RoutePoint::new(Coord { x: 0.0, y: 0.0 }, 0.0),
///         RoutePoint::new(Coord { x: 1.0, y: 0.0 }, 69.1),
///     ],
///     69.1,
/// )?;
/// assert_eq!(route.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    points: Vec<RoutePoint>,
    total_distance_miles: f64,
}

impl Route {
    /// Validate and construct a [`Route`].
    ///
    /// # Errors
    /// Returns [`RouteError`] when fewer than two points are supplied, a
    /// value is not finite, cumulative distance decreases, the route has no
    /// length, or `total_distance_miles` is not positive.
    pub fn new(points: Vec<RoutePoint>, total_distance_miles: f64) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewPoints {
                count: points.len(),
            });
        }
        validate_points(&points)?;
        if !total_distance_miles.is_finite() || total_distance_miles <= 0.0 {
            return Err(RouteError::NonPositiveTotalDistance {
                total_distance_miles,
            });
        }
        Ok(Self {
            points,
            total_distance_miles,
        })
    }

    /// Build a route from bare coordinates, deriving cumulative distances
    /// with the haversine formula.
    ///
    /// # Errors
    /// See [`Route::new`].
    pub fn from_coords(
        coords: &[Coord<f64>],
        total_distance_miles: f64,
    ) -> Result<Self, RouteError> {
        let points = coords
            .iter()
            .zip(cumulative_distances(coords))
            .map(|(&location, distance)| RoutePoint::new(location, distance))
            .collect();
        Self::new(points, total_distance_miles)
    }

    /// Build a route from bare coordinates and use the measured polyline
    /// length as the total distance.
    ///
    /// # Errors
    /// See [`Route::new`].
    pub fn from_coords_measured(coords: &[Coord<f64>]) -> Result<Self, RouteError> {
        let total = cumulative_distances(coords).last().copied().unwrap_or(0.0);
        Self::from_coords(coords, total)
    }

    /// Build a route from an encoded polyline.
    ///
    /// When `total_distance_miles` is `None` the measured polyline length is
    /// used.
    ///
    /// # Errors
    /// Returns [`RouteError::Polyline`] for malformed input and otherwise the
    /// errors of [`Route::new`].
    pub fn from_polyline(
        encoded: &str,
        precision: u8,
        total_distance_miles: Option<f64>,
    ) -> Result<Self, RouteError> {
        let coords = decode_polyline(encoded, precision)?;
        match total_distance_miles {
            Some(total) => Self::from_coords(&coords, total),
            None => Self::from_coords_measured(&coords),
        }
    }

    /// Ordered route points.
    #[must_use]
    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }

    /// Total driving distance reported for the route, in miles.
    #[must_use]
    pub const fn total_distance_miles(&self) -> f64 {
        self.total_distance_miles
    }

    /// Number of route points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a validated route has at least two points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First route point.
    #[must_use]
    pub fn start(&self) -> Option<&RoutePoint> {
        self.points.first()
    }

    /// Last route point.
    #[must_use]
    pub fn end(&self) -> Option<&RoutePoint> {
        self.points.last()
    }
}

fn validate_points(points: &[RoutePoint]) -> Result<(), RouteError> {
    let mut previous: Option<f64> = None;
    for (index, point) in points.iter().enumerate() {
        let finite = point.location.x.is_finite()
            && point.location.y.is_finite()
            && point.distance_from_start.is_finite();
        if !finite {
            return Err(RouteError::NonFiniteCoordinate { index });
        }
        if previous.is_some_and(|prev| point.distance_from_start < prev) {
            return Err(RouteError::DecreasingDistance { index });
        }
        previous = Some(point.distance_from_start);
    }
    let first = points.first().map(|p| p.distance_from_start);
    let last = points.last().map(|p| p.distance_from_start);
    match (first, last) {
        (Some(a), Some(b)) if b > a => Ok(()),
        _ => Err(RouteError::ZeroLength),
    }
}
