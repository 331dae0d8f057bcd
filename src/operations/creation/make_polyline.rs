use crate::error::{CurveError, Result};
use crate::geometry::Curve;
use crate::math::distance_2d::{min_step_length, same_point};
use crate::math::Point2;

use super::check_point;

/// Creates a curve through an explicit list of points.
///
/// When the last point coincides with the first (closer than the shortest
/// step between consecutive points), it is dropped and the curve is closed.
pub struct MakePolyline {
    points: Vec<Point2>,
}

impl MakePolyline {
    /// Creates a new `MakePolyline` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given or a point is not
    /// finite.
    pub fn execute(&self) -> Result<Curve> {
        for p in &self.points {
            check_point("points", p)?;
        }
        let (Some(delta), Some(first), Some(last)) = (
            min_step_length(&self.points),
            self.points.first(),
            self.points.last(),
        ) else {
            return Err(CurveError::TooFewPoints {
                required: 2,
                actual: self.points.len(),
            }
            .into());
        };

        let closed = same_point(first, last, delta);
        let mut points = self.points.clone();
        if closed {
            points.pop();
        }
        Ok(Curve::chain(points, closed))
    }
}
