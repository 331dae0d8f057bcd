use std::collections::{HashMap, VecDeque};
use std::ops::Range;

use crate::geometry::Segment;

/// Segments ordered head to tail, split into boundaries.
///
/// `starts[k]` is the index in `segments` where boundary `k` begins; the
/// boundary runs up to the next start (or the end of `segments`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSegments {
    pub segments: Vec<Segment>,
    pub starts: Vec<usize>,
}

impl SortedSegments {
    /// Number of boundaries.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.starts.len()
    }

    /// Index range in `segments` covered by boundary `k`.
    #[must_use]
    pub fn boundary_range(&self, k: usize) -> Option<Range<usize>> {
        let start = *self.starts.get(k)?;
        let end = self.starts.get(k + 1).copied().unwrap_or(self.segments.len());
        Some(start..end)
    }

    /// Returns the boundary that contains the segment at `position`.
    #[must_use]
    pub fn boundary_of(&self, position: usize) -> Option<usize> {
        if position >= self.segments.len() {
            return None;
        }
        self.starts
            .partition_point(|&s| s <= position)
            .checked_sub(1)
    }

    /// Iterates over the segments of each boundary.
    pub fn boundaries(&self) -> impl Iterator<Item = &[Segment]> + '_ {
        (0..self.starts.len()).filter_map(|k| self.boundary_range(k).map(|r| &self.segments[r]))
    }

    /// Returns `true` when boundary `k` ends where it starts.
    #[must_use]
    pub fn is_closed(&self, k: usize) -> bool {
        self.boundary_range(k)
            .and_then(|r| {
                let first = self.segments.get(r.start)?;
                let last = self.segments.get(r.end.checked_sub(1)?)?;
                Some(last.end == first.start)
            })
            .unwrap_or(false)
    }
}

/// Removes and returns the first segment in `remaining` that starts at `node`.
///
/// If no segment starts there (or `node` is `None`), the first remaining
/// segment is removed instead and the flag is `true`: a new boundary
/// begins. Returns `None` once `remaining` is empty.
pub fn find_next_segment(
    remaining: &mut Vec<Segment>,
    node: Option<usize>,
) -> Option<(Segment, bool)> {
    if remaining.is_empty() {
        return None;
    }
    let found = node.and_then(|n| remaining.iter().position(|s| s.start == n));
    let new_boundary = found.is_none();
    let seg = remaining.remove(found.unwrap_or(0));
    Some((seg, new_boundary))
}

/// Orders segments head to tail.
///
/// Produces the same result as repeatedly calling [`find_next_segment`]
/// with the end node of the previously picked segment, in linear time.
#[must_use]
pub fn sort_segments(segments: Vec<Segment>) -> SortedSegments {
    let count = segments.len();
    let mut pool = SegmentPool::new(segments);
    let mut sorted = SortedSegments {
        segments: Vec::with_capacity(count),
        starts: Vec::new(),
    };

    let mut node = None;
    while let Some((seg, new_boundary)) = pool.take_next(node) {
        if new_boundary {
            sorted.starts.push(sorted.segments.len());
        }
        node = Some(seg.end);
        sorted.segments.push(seg);
    }

    debug_assert_eq!(sorted.segments.len(), count);
    tracing::debug!(
        segments = count,
        boundaries = sorted.starts.len(),
        "sorted boundary segments"
    );
    sorted
}

/// Unsorted segments with a per-node lookup of the ones still unused.
struct SegmentPool {
    segments: Vec<Segment>,
    used: Vec<bool>,
    by_start: HashMap<usize, VecDeque<usize>>,
    cursor: usize,
}

impl SegmentPool {
    fn new(segments: Vec<Segment>) -> Self {
        let mut by_start: HashMap<usize, VecDeque<usize>> = HashMap::new();
        for (i, seg) in segments.iter().enumerate() {
            by_start.entry(seg.start).or_default().push_back(i);
        }
        Self {
            used: vec![false; segments.len()],
            segments,
            by_start,
            cursor: 0,
        }
    }

    fn take_next(&mut self, node: Option<usize>) -> Option<(Segment, bool)> {
        if let Some(queue) = node.and_then(|n| self.by_start.get_mut(&n)) {
            while let Some(i) = queue.pop_front() {
                if !self.used[i] {
                    self.used[i] = true;
                    return Some((self.segments[i], false));
                }
            }
        }

        while self.cursor < self.segments.len() && self.used[self.cursor] {
            self.cursor += 1;
        }
        let i = self.cursor;
        if i == self.segments.len() {
            return None;
        }
        self.used[i] = true;
        Some((self.segments[i], true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(pairs: &[(usize, usize)]) -> Vec<Segment> {
        pairs.iter().copied().map(Segment::from).collect()
    }

    /// Reference ordering built from `find_next_segment` alone.
    fn naive_sort(mut remaining: Vec<Segment>) -> SortedSegments {
        let mut sorted = SortedSegments::default();
        let mut node = None;
        while let Some((seg, new_boundary)) = find_next_segment(&mut remaining, node) {
            if new_boundary {
                sorted.starts.push(sorted.segments.len());
            }
            node = Some(seg.end);
            sorted.segments.push(seg);
        }
        sorted
    }

    #[test]
    fn single_loop_is_chained() {
        let sorted = sort_segments(segs(&[(3, 6), (1, 12), (12, 3), (6, 1)]));
        assert_eq!(sorted.segments, segs(&[(3, 6), (6, 1), (1, 12), (12, 3)]));
        assert_eq!(sorted.starts, vec![0]);
        assert!(sorted.is_closed(0));
    }

    #[test]
    fn two_loops_are_split() {
        let input = segs(&[(0, 1), (10, 11), (1, 2), (11, 12), (2, 0), (12, 10)]);
        let sorted = sort_segments(input);
        assert_eq!(
            sorted.segments,
            segs(&[(0, 1), (1, 2), (2, 0), (10, 11), (11, 12), (12, 10)])
        );
        assert_eq!(sorted.starts, vec![0, 3]);
        assert_eq!(sorted.boundary_count(), 2);
        assert_eq!(sorted.boundary_range(1), Some(3..6));
        assert!(sorted.is_closed(1));
    }

    #[test]
    fn open_chain_breaks_into_boundaries() {
        // (2, 3) is picked first; nothing starts at 3, so (0, 1) opens a new
        // boundary and continues into (1, 2), which ends the chain again.
        let sorted = sort_segments(segs(&[(2, 3), (0, 1), (1, 2)]));
        assert_eq!(sorted.segments, segs(&[(2, 3), (0, 1), (1, 2)]));
        assert_eq!(sorted.starts, vec![0, 1]);
        assert!(!sorted.is_closed(0));
        assert!(!sorted.is_closed(1));
    }

    #[test]
    fn branching_takes_first_match() {
        // Node 1 has two outgoing segments; the earlier one wins.
        let input = segs(&[(0, 1), (1, 5), (1, 2), (2, 0), (5, 1)]);
        let sorted = sort_segments(input.clone());
        assert_eq!(sorted, naive_sort(input));
        assert_eq!(sorted.segments[1], Segment::new(1, 5));
    }

    #[test]
    fn matches_naive_ordering() {
        let input = segs(&[
            (7, 8),
            (4, 5),
            (8, 9),
            (5, 6),
            (9, 7),
            (6, 4),
            (20, 21),
            (0, 1),
            (1, 0),
            (21, 22),
        ]);
        assert_eq!(sort_segments(input.clone()), naive_sort(input));
    }

    #[test]
    fn empty_input() {
        let sorted = sort_segments(Vec::new());
        assert!(sorted.segments.is_empty());
        assert!(sorted.starts.is_empty());
        assert_eq!(sorted.boundary_of(0), None);
    }

    #[test]
    fn boundary_lookup() {
        let sorted = sort_segments(segs(&[(0, 1), (1, 0), (5, 6), (6, 7), (7, 5)]));
        assert_eq!(sorted.starts, vec![0, 2]);
        assert_eq!(sorted.boundary_of(0), Some(0));
        assert_eq!(sorted.boundary_of(1), Some(0));
        assert_eq!(sorted.boundary_of(2), Some(1));
        assert_eq!(sorted.boundary_of(4), Some(1));
        assert_eq!(sorted.boundary_of(5), None);
        let lens: Vec<usize> = sorted.boundaries().map(<[Segment]>::len).collect();
        assert_eq!(lens, vec![2, 3]);
    }

    #[test]
    fn find_next_segment_reports_new_boundary() {
        let mut remaining = segs(&[(4, 5), (1, 2)]);
        assert_eq!(
            find_next_segment(&mut remaining, Some(1)),
            Some((Segment::new(1, 2), false))
        );
        assert_eq!(
            find_next_segment(&mut remaining, Some(2)),
            Some((Segment::new(4, 5), true))
        );
        assert_eq!(find_next_segment(&mut remaining, Some(5)), None);
    }
}
