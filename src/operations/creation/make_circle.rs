use std::f64::consts::TAU;

use crate::error::{CurveError, Result};
use crate::geometry::{Curve, Sampling};
use crate::math::Point2;

use super::check_point;

/// Creates a circle, or a circular arc between two angles.
///
/// A span of one full turn produces a closed curve without a duplicated
/// end point. Any other span produces an open arc that includes both end
/// angles.
pub struct MakeCircle {
    center: Point2,
    radius: f64,
    a_min: f64,
    a_max: f64,
    sampling: Sampling,
}

impl MakeCircle {
    /// Creates a new full-circle `MakeCircle` operation with 10 points.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            a_min: 0.0,
            a_max: TAU,
            sampling: Sampling::Points(10),
        }
    }

    /// Restricts the curve to the angles `[a_min, a_max]` (radians).
    #[must_use]
    pub fn with_angles(mut self, a_min: f64, a_max: f64) -> Self {
        self.a_min = a_min;
        self.a_max = a_max;
        self
    }

    /// Sets how many points the curve gets.
    ///
    /// For `EdgeLength(h)` the count is `floor(|radius / h * span|) + 1`.
    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the center, radius or angles are not finite, the
    /// radius is not positive, the span is zero, or the sampling is invalid.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Curve> {
        check_point("center", &self.center)?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(CurveError::InvalidParameter {
                parameter: "radius",
                value: self.radius,
            }
            .into());
        }
        for (parameter, value) in [("a_min", self.a_min), ("a_max", self.a_max)] {
            if !value.is_finite() {
                return Err(CurveError::InvalidParameter { parameter, value }.into());
            }
        }

        let span = self.a_max - self.a_min;
        if span == 0.0 {
            return Err(CurveError::InvalidParameter {
                parameter: "a_max",
                value: self.a_max,
            }
            .into());
        }

        let count = self.sampling.point_count(self.radius * span)?;
        let delta = span / count as f64;
        let closed = (span - TAU).abs() < 0.1 * delta.abs();
        let n = if closed { count.max(3) } else { count.max(2) };

        // Closed: n angles over [a_min, a_max). Open: n angles over [a_min, a_max].
        let step = if closed {
            span / n as f64
        } else {
            span / (n - 1) as f64
        };

        let points = (0..n)
            .map(|j| {
                let angle = self.a_min + step * j as f64;
                Point2::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                )
            })
            .collect();

        Ok(Curve::chain(points, closed))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Segment;
    use crate::math::polygon_2d::signed_area;

    #[test]
    fn full_circle_is_closed() {
        let c = MakeCircle::new(Point2::new(1.0, 2.0), 3.0).execute().unwrap();
        assert_eq!(c.len(), 10);
        assert_eq!(c.segments.len(), 10);
        assert!(c.is_closed());
        assert_eq!(c.segments[9], Segment::new(9, 0));

        for p in &c.points {
            assert_relative_eq!(nalgebra::distance(p, &Point2::new(1.0, 2.0)), 3.0, epsilon = 1e-12);
        }
        // Counter-clockwise, starting at angle zero.
        assert_relative_eq!(c.points[0].x, 4.0, epsilon = 1e-12);
        assert!(signed_area(&c.points) > 0.0);
    }

    #[test]
    fn arc_includes_both_ends() {
        let c = MakeCircle::new(Point2::origin(), 1.0)
            .with_angles(0.0, FRAC_PI_2)
            .with_sampling(Sampling::Points(5))
            .execute()
            .unwrap();
        assert_eq!(c.len(), 5);
        assert_eq!(c.segments.len(), 4);
        assert!(!c.is_closed());
        assert_relative_eq!(c.points[4].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.points[4].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn edge_length_sampling() {
        let c = MakeCircle::new(Point2::origin(), 1.0)
            .with_sampling(Sampling::EdgeLength(0.1))
            .execute()
            .unwrap();
        // floor(2π / 0.1) + 1
        assert_eq!(c.len(), 63);
        assert!(c.is_closed());
    }

    #[test]
    fn reversed_full_turn_is_closed_and_clockwise() {
        let c = MakeCircle::new(Point2::origin(), 2.0)
            .with_angles(TAU, 0.0)
            .with_sampling(Sampling::Points(8))
            .execute()
            .unwrap();
        // The turn is -2π, not 2π, so this is an open arc back to the start.
        assert!(!c.is_closed());
        assert_eq!(c.len(), 8);
        assert!(signed_area(&c.points) < 0.0);
    }

    #[test]
    fn tiny_counts_are_clamped() {
        let closed = MakeCircle::new(Point2::origin(), 1.0)
            .with_sampling(Sampling::Points(1))
            .execute()
            .unwrap();
        assert_eq!(closed.len(), 3);

        let arc = MakeCircle::new(Point2::origin(), 1.0)
            .with_angles(0.0, PI)
            .with_sampling(Sampling::Points(1))
            .execute()
            .unwrap();
        assert_eq!(arc.len(), 2);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(MakeCircle::new(Point2::origin(), 0.0).execute().is_err());
        assert!(MakeCircle::new(Point2::origin(), f64::NAN).execute().is_err());
        assert!(MakeCircle::new(Point2::origin(), 1.0)
            .with_angles(1.0, 1.0)
            .execute()
            .is_err());
    }
}
