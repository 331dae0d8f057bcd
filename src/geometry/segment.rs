/// A directed edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the undirected `(min, max)` form of this segment.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            self.reversed()
        }
    }

    /// Returns the segment with its ends swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the same segment with both indices shifted by `offset`.
    #[must_use]
    pub fn offset(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl From<(usize, usize)> for Segment {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<[usize; 2]> for Segment {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

/// Builds the chain `(0, 1), (1, 2), ..., (n-2, n-1)` and, when `closed`,
/// the closing segment `(n-1, 0)`.
#[must_use]
pub fn chain_segments(point_count: usize, closed: bool) -> Vec<Segment> {
    let mut segments: Vec<Segment> = (1..point_count).map(|j| Segment::new(j - 1, j)).collect();
    if closed && point_count > 1 {
        segments.push(Segment::new(point_count - 1, 0));
    }
    segments
}
