//! Route thinning ahead of projection.

use std::borrow::Cow;

use fuelstop_core::{RoutePoint, SamplingConfig};

/// Thin `points` to roughly `sampling.target` vertices.
///
/// Routes with at most `sampling.threshold` points are returned untouched.
/// Longer routes keep every `len / target`-th point, and the final point is
/// always kept so the sampled polyline still reaches the destination.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_core::{RoutePoint, SamplingConfig};
/// use fuelstop_corridor::sample_route;
///
/// let points: Vec<RoutePoint> = (0..10_u32)
///     .map(|i| RoutePoint::new(Coord { x: f64::from(i), y: 0.0 }, f64::from(i)))
///     .collect();
/// let sampled = sample_route(&points, &SamplingConfig { threshold: 4, target: 3 });
/// assert_eq!(sampled.len(), 4);
/// assert_eq!(sampled.last(), points.last());
/// ```
#[must_use]
pub fn sample_route<'a>(points: &'a [RoutePoint], sampling: &SamplingConfig) -> Cow<'a, [RoutePoint]> {
    if points.len() <= sampling.threshold {
        return Cow::Borrowed(points);
    }
    let step = points
        .len()
        .checked_div(sampling.target)
        .unwrap_or(1)
        .max(1);
    let mut kept: Vec<RoutePoint> = points.iter().step_by(step).copied().collect();
    if let Some(&last) = points.last()
        && kept.last() != Some(&last)
    {
        kept.push(last);
    }
    log::debug!(
        "sampled route from {} to {} points (step {step})",
        points.len(),
        kept.len()
    );
    Cow::Owned(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn line(count: u32) -> Vec<RoutePoint> {
        (0..count)
            .map(|i| RoutePoint::new(Coord { x: f64::from(i), y: 0.0 }, f64::from(i)))
            .collect()
    }

    #[rstest]
    fn short_routes_are_borrowed() {
        let points = line(50);
        let sampled = sample_route(&points, &SamplingConfig::default());
        assert!(matches!(sampled, Cow::Borrowed(_)));
        assert_eq!(sampled.len(), 50);
    }

    #[rstest]
    fn long_routes_keep_every_step_and_the_last_point() {
        let points = line(5000);
        let sampled = sample_route(&points, &SamplingConfig::default());
        assert_eq!(sampled.len(), 2501);
        assert_eq!(sampled.first(), points.first());
        assert_eq!(sampled.last(), points.last());
        assert_eq!(sampled.get(1).map(|p| p.distance_from_start), Some(2.0));
    }

    #[rstest]
    fn last_point_is_not_duplicated_when_the_step_lands_on_it() {
        let points = line(7);
        let sampled = sample_route(&points, &SamplingConfig { threshold: 5, target: 3 });
        let markers: Vec<f64> = sampled.iter().map(|p| p.distance_from_start).collect();
        assert_eq!(markers, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[rstest]
    fn sampled_distances_stay_monotonic() {
        let points = line(4321);
        let sampled = sample_route(&points, &SamplingConfig { threshold: 100, target: 100 });
        assert!(
            sampled
                .iter()
                .zip(sampled.iter().skip(1))
                .all(|(a, b)| a.distance_from_start <= b.distance_from_start)
        );
    }
}
