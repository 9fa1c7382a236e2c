//! Planar projection of a point onto a polyline segment.
#![expect(
    clippy::float_arithmetic,
    reason = "segment projection is floating-point geometry"
)]

use geo::Coord;

/// Result of [`project_onto_segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Closest point on the segment.
    pub point: Coord<f64>,
    /// Position of `point` along the segment, clamped to `[0, 1]`.
    pub t: f64,
}

/// Project `p` onto the segment `a → b`.
///
/// Longitude differences are scaled by the cosine of the segment's mid
/// latitude so the projection is locally equirectangular. A zero-length
/// segment projects every point onto `a`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use fuelstop_corridor::project_onto_segment;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 2.0, y: 0.0 };
/// let hit = project_onto_segment(Coord { x: 0.5, y: 0.3 }, a, b);
/// assert!((hit.t - 0.25).abs() < 1e-12);
/// assert!((hit.point.x - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn project_onto_segment(p: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> SegmentProjection {
    let scale = ((a.y + b.y) / 2.0).to_radians().cos();
    let dx = (b.x - a.x) * scale;
    let dy = b.y - a.y;
    let length_sq = dx.mul_add(dx, dy * dy);
    if length_sq <= 0.0 {
        return SegmentProjection { point: a, t: 0.0 };
    }
    let px = (p.x - a.x) * scale;
    let py = p.y - a.y;
    let t = (px.mul_add(dx, py * dy) / length_sq).clamp(0.0, 1.0);
    SegmentProjection {
        point: Coord {
            x: t.mul_add(b.x - a.x, a.x),
            y: t.mul_add(b.y - a.y, a.y),
        },
        t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const A: Coord<f64> = Coord { x: 0.0, y: 0.0 };
    const B: Coord<f64> = Coord { x: 1.0, y: 0.0 };

    #[rstest]
    #[case::before_start(Coord { x: -0.5, y: 0.1 }, 0.0)]
    #[case::midway(Coord { x: 0.5, y: -0.2 }, 0.5)]
    #[case::past_end(Coord { x: 3.0, y: 0.0 }, 1.0)]
    fn parameter_is_clamped(#[case] p: Coord<f64>, #[case] expected: f64) {
        let hit = project_onto_segment(p, A, B);
        assert!((hit.t - expected).abs() < 1e-12, "t = {}", hit.t);
        assert!(hit.point.y.abs() < 1e-12);
    }

    #[rstest]
    fn zero_length_segment_maps_to_its_start() {
        let a = Coord { x: -90.0, y: 40.0 };
        let hit = project_onto_segment(Coord { x: -89.0, y: 41.0 }, a, a);
        assert_eq!(hit, SegmentProjection { point: a, t: 0.0 });
    }

    #[rstest]
    fn longitude_is_scaled_by_latitude() {
        // Unscaled, an eastward offset would land halfway along.
        let a = Coord { x: 0.0, y: 60.0 };
        let b = Coord { x: 1.0, y: 61.0 };
        let hit = project_onto_segment(Coord { x: 1.0, y: 60.0 }, a, b);
        assert!(hit.t > 0.0 && hit.t < 0.5, "t = {}", hit.t);
    }

    #[rstest]
    fn points_on_the_segment_project_onto_themselves() {
        let p = Coord { x: 0.25, y: 0.0 };
        let hit = project_onto_segment(p, A, B);
        assert!((hit.point.x - p.x).abs() < 1e-12);
        assert!((hit.t - 0.25).abs() < 1e-12);
    }
}
