use super::Point2;

/// Returns `true` when `p1` and `p2` are closer than `delta`.
///
/// The comparison is strict, so a `delta` of zero never matches.
#[must_use]
pub fn same_point(p1: &Point2, p2: &Point2, delta: f64) -> bool {
    nalgebra::distance(p1, p2) < delta
}

/// Returns the smallest distance between consecutive points of `points`.
///
/// Returns `None` when there are fewer than two points.
#[must_use]
pub fn min_step_length(points: &[Point2]) -> Option<f64> {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .reduce(f64::min)
}

/// Checks that both coordinates of a point are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
