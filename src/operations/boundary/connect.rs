use crate::error::{BoundaryError, Result};
use crate::geometry::Segment;
use crate::math::Point2;

use super::closest::{find_closest_node, DistanceConstraint};
use super::sort::{sort_segments, SortedSegments};

/// Sorts boundary segments and optionally picks where each boundary starts.
///
/// Without start points this is [`sort_segments`]. With start points, each
/// point selects the boundary node closest to it and the boundary holding
/// that node is rotated to begin there. A boundary is rotated at most once:
/// the first point that lands on it wins.
pub struct ConnectBoundary<'a> {
    segments: &'a [Segment],
    points: &'a [Point2],
    start_points: Vec<Point2>,
}

impl<'a> ConnectBoundary<'a> {
    /// Creates a new `ConnectBoundary` operation over `segments`, whose
    /// indices refer to `points`.
    #[must_use]
    pub fn new(segments: &'a [Segment], points: &'a [Point2]) -> Self {
        Self {
            segments,
            points,
            start_points: Vec::new(),
        }
    }

    /// Sets the points the boundaries should start closest to.
    #[must_use]
    pub fn starting_at(mut self, start_points: Vec<Point2>) -> Self {
        self.start_points = start_points;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment references a missing point or a start
    /// point is not finite.
    pub fn execute(&self) -> Result<SortedSegments> {
        for seg in self.segments {
            let node = seg.start.max(seg.end);
            if node >= self.points.len() {
                return Err(BoundaryError::NodeOutOfRange {
                    node,
                    len: self.points.len(),
                }
                .into());
            }
        }

        let mut sorted = sort_segments(self.segments.to_vec());
        if self.start_points.is_empty() || sorted.segments.is_empty() {
            return Ok(sorted);
        }

        // Boundary nodes, one per sorted segment.
        let nodes: Vec<usize> = sorted.segments.iter().map(|s| s.start).collect();
        let closest = find_closest_node(
            &nodes,
            self.points,
            &self.start_points,
            &DistanceConstraint::None,
        )?;

        let mut reordered = vec![false; sorted.boundary_count()];
        for node in closest.iter().filter_map(|c| c.node) {
            let Some(position) = nodes.iter().position(|&n| n == node) else {
                continue;
            };
            let Some(boundary) = sorted.boundary_of(position) else {
                continue;
            };
            if reordered[boundary] {
                continue;
            }
            if let Some(range) = sorted.boundary_range(boundary) {
                sorted.segments[range.clone()].rotate_left(position - range.start);
                reordered[boundary] = true;
                tracing::debug!(boundary, node, "boundary rotated to start point");
            }
        }

        Ok(sorted)
    }
}
