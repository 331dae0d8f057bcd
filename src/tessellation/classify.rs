use std::collections::{HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, PositionInTriangulation, Triangulation,
};

use crate::math::Point2;

pub(crate) type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Returns the inner faces that belong to the meshed region.
///
/// Faces reachable from the convex hull without crossing a constraint edge
/// are outside. Every other face is inside, including regions enclosed by
/// nested loops. Faces connected to a hole seed without crossing a
/// constraint edge are removed afterwards.
pub(crate) fn interior_faces(cdt: &Cdt, holes: &[Point2]) -> HashSet<FixedFaceHandle<InnerTag>> {
    let exterior = hull_region(cdt);
    let mut interior: HashSet<_> = cdt
        .inner_faces()
        .map(|f| f.fix())
        .filter(|f| !exterior.contains(f))
        .collect();
    for hole in holes {
        for face in hole_region(cdt, hole) {
            interior.remove(&face);
        }
    }
    interior
}

/// Flood-fills inward from the hull, stopping at constraint edges.
fn hull_region(cdt: &Cdt) -> HashSet<FixedFaceHandle<InnerTag>> {
    let outer = cdt.outer_face().fix();
    let seeds = cdt
        .directed_edges()
        .filter(|e| e.face().fix() == outer)
        .filter(|e| !cdt.is_constraint_edge(e.as_undirected().fix()))
        .filter_map(|e| e.rev().face().as_inner())
        .map(|f| f.fix());
    flood(cdt, seeds)
}

/// Faces reachable from the face holding `seed` without crossing a
/// constraint edge.
fn hole_region(cdt: &Cdt, seed: &Point2) -> HashSet<FixedFaceHandle<InnerTag>> {
    let mut seeds = Vec::new();
    match cdt.locate(SpadePoint2::new(seed.x, seed.y)) {
        PositionInTriangulation::OnFace(face) => seeds.push(face),
        PositionInTriangulation::OnEdge(edge) => {
            let edge = cdt.directed_edge(edge);
            seeds.extend(edge.face().as_inner().map(|f| f.fix()));
            seeds.extend(edge.rev().face().as_inner().map(|f| f.fix()));
        }
        PositionInTriangulation::OnVertex(vertex) => {
            seeds.extend(
                cdt.vertex(vertex)
                    .out_edges()
                    .filter_map(|e| e.face().as_inner())
                    .map(|f| f.fix()),
            );
        }
        _ => {
            tracing::debug!(x = seed.x, y = seed.y, "hole seed not inside any triangle");
        }
    }
    flood(cdt, seeds)
}

/// Faces connected to `seeds` through non-constraint edges.
fn flood(
    cdt: &Cdt,
    seeds: impl IntoIterator<Item = FixedFaceHandle<InnerTag>>,
) -> HashSet<FixedFaceHandle<InnerTag>> {
    let mut region = HashSet::new();
    let mut queue: VecDeque<_> = seeds.into_iter().collect();

    while let Some(face_fix) = queue.pop_front() {
        if !region.insert(face_fix) {
            continue;
        }
        for edge in cdt.face(face_fix).adjacent_edges() {
            if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                continue;
            }
            if let Some(neighbor) = edge.rev().face().as_inner() {
                if !region.contains(&neighbor.fix()) {
                    queue.push_back(neighbor.fix());
                }
            }
        }
    }

    region
}
