mod classify;
mod mesh_edges;
mod tri_mesh;

pub use mesh_edges::{find_edges, MeshEdges};
pub use tri_mesh::TriMesh;

use crate::math::polygon_2d::triangle_area;
use crate::math::Point2;

/// Parameters controlling mesh generation.
#[derive(Debug, Clone)]
pub struct MeshParams {
    /// Target edge length; bounds triangle area by `0.5 * h^2`.
    pub max_edge_length: Option<f64>,
    /// Seed points inside regions that must stay empty.
    pub holes: Vec<Point2>,
    /// Minimum angle (degrees) the quality refinement aims for.
    pub min_angle_deg: f64,
    /// Maximum number of Steiner points refinement may insert.
    pub max_additional_vertices: usize,
    /// Maximum number of rounds for a custom refinement predicate.
    pub max_refinement_rounds: usize,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            max_edge_length: None,
            holes: Vec::new(),
            min_angle_deg: 20.0,
            max_additional_vertices: 10_000,
            max_refinement_rounds: 16,
        }
    }
}

/// A 2D triangle mesh.
///
/// Triangles are counter-clockwise and index into `points`.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub points: Vec<Point2>,
    pub triangles: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Extracts the unique and boundary edges of the mesh.
    #[must_use]
    pub fn edges(&self) -> MeshEdges {
        find_edges(&self.triangles)
    }

    /// Corner positions of triangle `t`.
    #[must_use]
    pub fn corners(&self, t: usize) -> Option<[Point2; 3]> {
        let [a, b, c] = *self.triangles.get(t)?;
        Some([
            *self.points.get(a)?,
            *self.points.get(b)?,
            *self.points.get(c)?,
        ])
    }

    /// Total area covered by the triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        (0..self.triangles.len())
            .filter_map(|t| self.corners(t))
            .map(|[a, b, c]| triangle_area(&a, &b, &c))
            .sum()
    }
}
