use crate::error::{CurveError, Result};
use crate::geometry::Curve;
use crate::math::distance_2d::{min_step_length, same_point};

/// Joins two curves end to start into a single chained curve.
///
/// The merge tolerance is the shortest step between consecutive points of
/// either curve. A start point of `second` that coincides with the end of
/// `first` is dropped, and so is a final point that returns to the start of
/// `first`, in which case the result is closed.
///
/// Only the point lists are used; the joined segments are rebuilt as one
/// chain.
pub struct JoinCurves<'a> {
    first: &'a Curve,
    second: &'a Curve,
    closed: bool,
}

impl<'a> JoinCurves<'a> {
    /// Creates a new `JoinCurves` operation.
    #[must_use]
    pub fn new(first: &'a Curve, second: &'a Curve) -> Self {
        Self {
            first,
            second,
            closed: false,
        }
    }

    /// Forces the result to be closed even if its ends do not meet.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TooFewPoints` if either curve is empty, or if
    /// neither has two points to derive a merge tolerance from.
    pub fn execute(&self) -> Result<Curve> {
        let p1 = &self.first.points;
        let p2 = &self.second.points;
        let (Some(first_start), Some(first_end), Some(second_start)) =
            (p1.first(), p1.last(), p2.first())
        else {
            return Err(CurveError::TooFewPoints {
                required: 1,
                actual: p1.len().min(p2.len()),
            }
            .into());
        };

        let delta = match (min_step_length(p1), min_step_length(p2)) {
            (Some(a), Some(b)) => a.min(b),
            (Some(d), None) | (None, Some(d)) => d,
            (None, None) => {
                return Err(CurveError::TooFewPoints {
                    required: 2,
                    actual: p1.len().max(p2.len()),
                }
                .into())
            }
        };

        let skip = usize::from(same_point(first_end, second_start, delta));
        let mut points = Vec::with_capacity(p1.len() + p2.len());
        points.extend_from_slice(p1);
        points.extend_from_slice(&p2[skip..]);

        let del_last = points.len() > 1
            && points
                .last()
                .is_some_and(|last| same_point(last, first_start, delta));
        if del_last {
            points.pop();
        }

        Ok(Curve::chain(points, del_last || self.closed))
    }
}
