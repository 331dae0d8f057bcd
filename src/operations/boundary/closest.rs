use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{BoundaryError, Result};
use crate::math::distance_2d::is_finite_point;
use crate::math::Point2;

/// Limits how far a query may be from its closest node.
///
/// A negative limit disables the check for that query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DistanceConstraint {
    #[default]
    None,
    /// One limit for every query.
    Uniform(f64),
    /// One limit per query, in query order.
    PerQuery(Vec<f64>),
}

impl DistanceConstraint {
    fn limit(&self, query: usize) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Uniform(d) => Some(*d),
            Self::PerQuery(ds) => ds.get(query).copied(),
        }
        .filter(|d| *d >= 0.0)
    }
}

/// Closest node for one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestNode {
    /// Point index of the closest node, or `None` if it violates the
    /// distance constraint.
    pub node: Option<usize>,
    /// Distance from the query to the closest node.
    pub distance: f64,
}

/// Nearest-neighbour index over a subset of points.
///
/// Build once and query many times.
pub struct NodeIndex {
    triangulation: DelaunayTriangulation<SpadePoint2<f64>>,
    /// Point index for every triangulation vertex, in vertex order.
    vertex_nodes: Vec<usize>,
}

impl NodeIndex {
    /// Indexes `points[nodes[k]]` for every `k`.
    ///
    /// Nodes sharing a position are represented by the first one listed.
    ///
    /// # Errors
    ///
    /// Returns an error if `nodes` is empty, a node is out of range for
    /// `points`, or a node position cannot be indexed.
    pub fn build(nodes: &[usize], points: &[Point2]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(BoundaryError::EmptyNodeSet.into());
        }

        let mut triangulation = DelaunayTriangulation::<SpadePoint2<f64>>::new();
        let mut vertex_nodes = Vec::with_capacity(nodes.len());
        for &node in nodes {
            let p = points.get(node).ok_or(BoundaryError::NodeOutOfRange {
                node,
                len: points.len(),
            })?;
            let handle = triangulation
                .insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e: InsertionError| {
                    BoundaryError::InvalidCoordinates(format!("node {node}: {e}"))
                })?;
            if handle.index() == vertex_nodes.len() {
                vertex_nodes.push(node);
            }
        }

        Ok(Self {
            triangulation,
            vertex_nodes,
        })
    }

    /// Number of distinct node positions in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertex_nodes.len()
    }

    /// Returns `true` if the index holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_nodes.is_empty()
    }

    /// Finds the closest node to `query` and its distance.
    ///
    /// # Errors
    ///
    /// Returns an error if `query` has non-finite coordinates.
    pub fn nearest(&self, query: &Point2) -> Result<Option<(usize, f64)>> {
        if !is_finite_point(query) {
            return Err(BoundaryError::InvalidCoordinates(format!(
                "query ({}, {})",
                query.x, query.y
            ))
            .into());
        }
        let found = self
            .triangulation
            .nearest_neighbor(SpadePoint2::new(query.x, query.y))
            .and_then(|vh| {
                let node = *self.vertex_nodes.get(vh.fix().index())?;
                let pos = vh.position();
                Some((node, nalgebra::distance(&Point2::new(pos.x, pos.y), query)))
            });
        Ok(found)
    }

    /// Finds the closest node for every query, applying `constraint`.
    ///
    /// # Errors
    ///
    /// Returns an error if a per-query constraint list does not match the
    /// number of queries, or a query is not finite.
    pub fn query(
        &self,
        queries: &[Point2],
        constraint: &DistanceConstraint,
    ) -> Result<Vec<ClosestNode>> {
        if let DistanceConstraint::PerQuery(ds) = constraint {
            if ds.len() != queries.len() {
                return Err(BoundaryError::ConstraintLengthMismatch {
                    expected: queries.len(),
                    actual: ds.len(),
                }
                .into());
            }
        }

        queries
            .iter()
            .enumerate()
            .map(|(j, q)| -> Result<ClosestNode> {
                let Some((node, distance)) = self.nearest(q)? else {
                    return Err(BoundaryError::EmptyNodeSet.into());
                };
                let within = constraint.limit(j).is_none_or(|limit| distance <= limit);
                Ok(ClosestNode {
                    node: within.then_some(node),
                    distance,
                })
            })
            .collect()
    }
}

/// Finds the closest of `points[nodes[..]]` to each query point.
///
/// One-shot form of [`NodeIndex::build`] followed by [`NodeIndex::query`].
///
/// # Errors
///
/// Returns an error under the same conditions as those two calls.
pub fn find_closest_node(
    nodes: &[usize],
    points: &[Point2],
    queries: &[Point2],
    constraint: &DistanceConstraint,
) -> Result<Vec<ClosestNode>> {
    NodeIndex::build(nodes, points)?.query(queries, constraint)
}
