use std::collections::HashMap;

use crate::geometry::Segment;

/// Edges of a triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshEdges {
    /// Every distinct edge once, normalized to `(min, max)` and sorted.
    pub all: Vec<Segment>,
    /// Edges used by exactly one triangle, in order of appearance and in the
    /// orientation of their triangle.
    pub boundary: Vec<Segment>,
}

/// Extracts all edges and boundary edges from a triangle list.
///
/// Triangle `(a, b, c)` contributes `(a, b)`, `(b, c)` and `(c, a)`. For
/// consistently oriented triangles the boundary edges chain head to tail,
/// ready for [`sort_segments`](crate::operations::boundary::sort_segments).
#[must_use]
pub fn find_edges(triangles: &[[usize; 3]]) -> MeshEdges {
    let directed: Vec<Segment> = triangles
        .iter()
        .flat_map(|&[a, b, c]| [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)])
        .collect();

    let mut counts: HashMap<Segment, usize> = HashMap::with_capacity(directed.len());
    for seg in &directed {
        *counts.entry(seg.normalized()).or_default() += 1;
    }

    let boundary = directed
        .iter()
        .copied()
        .filter(|seg| counts.get(&seg.normalized()) == Some(&1))
        .collect();
    let mut all: Vec<Segment> = counts.into_keys().collect();
    all.sort_unstable();

    MeshEdges { all, boundary }
}
