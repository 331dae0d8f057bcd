use crate::error::{BoundaryError, Result};
use crate::geometry::Curve;

/// Computes the total length of a curve's segments.
pub struct Length<'a> {
    curve: &'a Curve,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self { curve }
    }

    /// Executes the query, returning the summed segment length.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment references a missing point.
    pub fn execute(&self) -> Result<f64> {
        let points = &self.curve.points;
        let mut total = 0.0;
        for seg in &self.curve.segments {
            let (Some(a), Some(b)) = (points.get(seg.start), points.get(seg.end)) else {
                return Err(BoundaryError::NodeOutOfRange {
                    node: seg.start.max(seg.end),
                    len: points.len(),
                }
                .into());
            };
            total += nalgebra::distance(a, b);
        }
        Ok(total)
    }
}
