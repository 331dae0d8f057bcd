use crate::math::Point2;

use super::segment::{chain_segments, Segment};

/// A piecewise-linear curve: points plus the segments connecting them.
///
/// Segment indices refer to `points`. Several disjoint curves can share one
/// `Curve` after [`Curve::append`]; the result is the planar straight-line
/// graph handed to the mesher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub points: Vec<Point2>,
    pub segments: Vec<Segment>,
}

impl Curve {
    /// Creates a curve from explicit points and segments.
    #[must_use]
    pub fn new(points: Vec<Point2>, segments: Vec<Segment>) -> Self {
        Self { points, segments }
    }

    /// Creates a curve that chains `points` in order, optionally closing it.
    #[must_use]
    pub fn chain(points: Vec<Point2>, closed: bool) -> Self {
        let segments = chain_segments(points.len(), closed);
        Self { points, segments }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` when the last segment ends where its chain starts.
    ///
    /// The chain is the run of head-to-tail segments ending with the last
    /// one, so after [`Curve::append`] this reports on the appended piece.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let Some(last) = self.segments.last() else {
            return false;
        };
        let head = self
            .segments
            .windows(2)
            .rposition(|w| w[0].end != w[1].start)
            .map_or(0, |k| k + 1);
        last.end == self.segments[head].start
    }

    /// Appends `other` as a disjoint piece, shifting its segment indices.
    pub fn append(&mut self, other: &Curve) {
        let offset = self.points.len();
        self.points.extend_from_slice(&other.points);
        self.segments
            .extend(other.segments.iter().map(|s| s.offset(offset)));
    }

    /// Consuming form of [`Curve::append`].
    #[must_use]
    pub fn with(mut self, other: &Curve) -> Self {
        self.append(other);
        self
    }
}
