//! `CorridorProjector`: the default [`Projector`] implementation.
//!
//! Candidates are matched against a (possibly sub-sampled) copy of the route.
//! A latitude band around each candidate skips vertices and segments that
//! cannot lie within the corridor: great-circle distance is never shorter
//! than the meridian arc between two latitudes.

use fuelstop_core::{
    Candidate, CorridorLimits, EARTH_RADIUS_MILES, PlannerConfig, ProjectedCandidate,
    ProjectionStrategy, Projector, Route, RoutePoint, SamplingConfig, haversine_miles,
};
use geo::Coord;

use crate::sample::sample_route;
use crate::segment::project_onto_segment;

/// Relative slack added to the latitude band to absorb rounding.
const BAND_SLACK: f64 = 1e-9;

/// Where a candidate lands on the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position along the route, in miles from the start.
    pub distance_from_start: f64,
    /// Offset from the route, in miles.
    pub distance_from_route: f64,
}

/// Projects candidates onto a route and filters them to the corridor.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::{Candidate, PlannerConfig, Projector, Route};
/// use fuelstop_corridor::CorridorProjector;
///
/// # fn main() -> Result<(), fuelstop_core::RouteError> {
/// let route = Route::from_coords_measured(&[
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 2.0, y: 0.0 },
/// ])?;
/// let station = Candidate::new("1", "Halfway", Coord { x: 1.0, y: 0.05 }, 3.1);
/// let config = PlannerConfig::default();
/// let projector = CorridorProjector::from_config(&config);
/// let placed = projector.project(&route, &[station], &config.corridor_limits());
/// assert_eq!(placed.len(), 1);
/// assert!((placed[0].distance_from_start - 69.09).abs() < 0.1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorridorProjector {
    strategy: ProjectionStrategy,
    sampling: SamplingConfig,
}

impl CorridorProjector {
    /// Construct a projector with an explicit strategy and sampling policy.
    #[must_use]
    pub const fn new(strategy: ProjectionStrategy, sampling: SamplingConfig) -> Self {
        Self { strategy, sampling }
    }

    /// Construct a projector from the planner configuration.
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.strategy, config.sampling)
    }

    /// Active projection strategy.
    #[must_use]
    pub const fn strategy(&self) -> ProjectionStrategy {
        self.strategy
    }

    /// Place `location` on the polyline described by `points`.
    ///
    /// Returns `None` when no vertex or segment lies within
    /// `max_offset_miles` of the location. Ties keep the earliest match.
    #[must_use]
    pub fn place(
        &self,
        points: &[RoutePoint],
        location: Coord<f64>,
        max_offset_miles: f64,
    ) -> Option<Placement> {
        let band = LatitudeBand::around(location, max_offset_miles);
        let best = match self.strategy {
            ProjectionStrategy::NearestPoint => nearest_vertex(points, location, band),
            ProjectionStrategy::Segment if points.len() < 2 => {
                nearest_vertex(points, location, band)
            }
            ProjectionStrategy::Segment => nearest_segment(points, location, band),
        }?;
        (best.distance_from_route <= max_offset_miles).then_some(best)
    }
}

impl Projector for CorridorProjector {
    fn project(
        &self,
        route: &Route,
        candidates: &[Candidate],
        limits: &CorridorLimits,
    ) -> Vec<ProjectedCandidate> {
        let sampled = sample_route(route.points(), &self.sampling);
        let mut projected: Vec<ProjectedCandidate> = candidates
            .iter()
            .filter(|candidate| {
                let usable = candidate.is_finite();
                if !usable {
                    log::debug!("skipping candidate {} with non-finite data", candidate.id);
                }
                usable
            })
            .filter_map(|candidate| {
                let placement =
                    self.place(&sampled, candidate.location, limits.max_corridor_width_miles)?;
                (placement.distance_from_start <= limits.max_range_miles).then(|| {
                    ProjectedCandidate::new(
                        candidate.clone(),
                        placement.distance_from_start,
                        placement.distance_from_route,
                    )
                })
            })
            .collect();
        projected.sort_by(|lhs, rhs| lhs.distance_from_start.total_cmp(&rhs.distance_from_start));
        log::debug!(
            "{} of {} candidates within {} miles of a {}-point route ({} strategy)",
            projected.len(),
            candidates.len(),
            limits.max_corridor_width_miles,
            sampled.len(),
            self.strategy
        );
        projected
    }
}

/// Latitudes outside `[min, max]` are farther than the corridor allows.
#[derive(Debug, Clone, Copy)]
struct LatitudeBand {
    min: f64,
    max: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "band limits are derived from miles per degree"
)]
impl LatitudeBand {
    const fn around(location: Coord<f64>, max_offset_miles: f64) -> Self {
        let miles_per_degree = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;
        let half_height = (max_offset_miles / miles_per_degree) * (1.0 + BAND_SLACK) + BAND_SLACK;
        Self {
            min: location.y - half_height,
            max: location.y + half_height,
        }
    }

    fn contains(self, latitude: f64) -> bool {
        (self.min..=self.max).contains(&latitude)
    }

    const fn overlaps(self, a: f64, b: f64) -> bool {
        (a <= self.max || b <= self.max) && (a >= self.min || b >= self.min)
    }
}

fn nearest_vertex(
    points: &[RoutePoint],
    location: Coord<f64>,
    band: LatitudeBand,
) -> Option<Placement> {
    points
        .iter()
        .filter(|point| band.contains(point.location.y))
        .map(|point| Placement {
            distance_from_start: point.distance_from_start,
            distance_from_route: haversine_miles(location, point.location),
        })
        .fold(None, keep_closest)
}

#[expect(
    clippy::float_arithmetic,
    reason = "mile-markers accumulate along the segment"
)]
fn nearest_segment(
    points: &[RoutePoint],
    location: Coord<f64>,
    band: LatitudeBand,
) -> Option<Placement> {
    points
        .iter()
        .zip(points.iter().skip(1))
        .filter(|(a, b)| band.overlaps(a.location.y, b.location.y))
        .map(|(a, b)| {
            let hit = project_onto_segment(location, a.location, b.location);
            Placement {
                distance_from_start: a.distance_from_start
                    + haversine_miles(a.location, hit.point),
                distance_from_route: haversine_miles(location, hit.point),
            }
        })
        .fold(None, keep_closest)
}

const fn keep_closest(best: Option<Placement>, next: Placement) -> Option<Placement> {
    match best {
        Some(current) if current.distance_from_route <= next.distance_from_route => Some(current),
        _ => Some(next),
    }
}
