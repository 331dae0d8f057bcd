use crate::error::{CurveError, Result};
use crate::geometry::{Curve, Sampling};
use crate::math::Point2;

use super::{check_point, JoinCurves, MakeLine};

/// Creates a closed axis-aligned rectangle from two opposite corners.
///
/// The outline runs `p1 -> (p2.x, p1.y) -> p2 -> (p1.x, p2.y)` and back to
/// `p1`, each side sampled as a [`MakeLine`].
pub struct MakeRectangle {
    p1: Point2,
    p2: Point2,
    sampling: Sampling,
}

impl MakeRectangle {
    /// Creates a new `MakeRectangle` operation with 60 points in total.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self {
            p1,
            p2,
            sampling: Sampling::Points(60),
        }
    }

    /// Sets the sampling of the whole outline.
    ///
    /// A point count is split evenly across the four sides; an edge length
    /// applies to every side.
    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner is not finite, the rectangle has zero
    /// width or height, or the sampling leaves a side without points.
    pub fn execute(&self) -> Result<Curve> {
        check_point("p1", &self.p1)?;
        check_point("p2", &self.p2)?;
        if self.p1.x == self.p2.x {
            return Err(CurveError::InvalidParameter {
                parameter: "width",
                value: 0.0,
            }
            .into());
        }
        if self.p1.y == self.p2.y {
            return Err(CurveError::InvalidParameter {
                parameter: "height",
                value: 0.0,
            }
            .into());
        }

        let p11 = Point2::new(self.p2.x, self.p1.y);
        let p22 = Point2::new(self.p1.x, self.p2.y);
        let side = self.sampling.per_side();

        let corners = [self.p1, p11, self.p2, p22, self.p1];
        let mut sides = corners
            .windows(2)
            .map(|w| MakeLine::new(w[0], w[1]).with_sampling(side).execute());

        let Some(first) = sides.next() else {
            return Ok(Curve::default());
        };
        let mut outline = first?;
        for next in sides {
            outline = JoinCurves::new(&outline, &next?).execute()?;
        }
        Ok(outline)
    }
}
