use crate::error::Result;
use crate::geometry::{Curve, Sampling};
use crate::math::Point2;

use super::check_point;

/// Creates an open straight line from `start` to `end`.
pub struct MakeLine {
    start: Point2,
    end: Point2,
    sampling: Sampling,
}

impl MakeLine {
    /// Creates a new `MakeLine` operation with 10 points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            sampling: Sampling::Points(10),
        }
    }

    /// Sets how many points the line gets.
    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Executes the operation.
    ///
    /// Points are evenly spaced with both endpoints included, so the line
    /// always has at least two points.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not finite or the sampling is
    /// invalid.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Curve> {
        check_point("start", &self.start)?;
        check_point("end", &self.end)?;

        let dir = self.end - self.start;
        let n = self.sampling.point_count(dir.norm())?.max(2);
        let last = (n - 1) as f64;

        let points = (0..n)
            .map(|j| {
                let t = j as f64 / last;
                self.start + dir * t
            })
            .collect();

        Ok(Curve::chain(points, false))
    }
}
