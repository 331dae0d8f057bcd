use spade::handles::FixedVertexHandle;
use spade::{AngleLimit, InsertionError, Point2 as SpadePoint2, RefinementParameters, Triangulation};

use crate::error::{MeshError, Result};
use crate::geometry::Curve;
use crate::math::distance_2d::is_finite_point;
use crate::math::polygon_2d::{triangle_area, triangle_centroid};
use crate::math::Point2;

use super::classify::{interior_faces, Cdt};
use super::{MeshParams, TriangleMesh};

/// Custom refinement test: triangle corners and area in, "split me" out.
type RefinePredicate<'a> = Box<dyn Fn(&[Point2; 3], f64) -> bool + 'a>;

/// Builds a constrained Delaunay triangle mesh of a curve set.
///
/// Every curve segment becomes a constraint edge and only the region
/// enclosed by the constraints is kept. Nested loops are meshed as
/// interfaces; use hole seeds to cut them out. Input point `i` is mesh point `i`;
/// Steiner points inserted by refinement follow the input points.
pub struct TriMesh<'a> {
    curve: &'a Curve,
    params: MeshParams,
    refinement: Option<RefinePredicate<'a>>,
}

impl<'a> TriMesh<'a> {
    /// Creates a new `TriMesh` operation with default parameters.
    #[must_use]
    pub fn new(curve: &'a Curve) -> Self {
        Self {
            curve,
            params: MeshParams::default(),
            refinement: None,
        }
    }

    /// Sets the mesh parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeshParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the target edge length.
    #[must_use]
    pub fn with_edge_length(mut self, edge_length: f64) -> Self {
        self.params.max_edge_length = Some(edge_length);
        self
    }

    /// Adds hole seed points.
    #[must_use]
    pub fn with_holes(mut self, holes: Vec<Point2>) -> Self {
        self.params.holes = holes;
        self
    }

    /// Replaces the built-in size/quality refinement with a predicate.
    ///
    /// Every round, each interior triangle for which `predicate(corners,
    /// area)` holds is split at its centroid. The minimum-angle bound and
    /// `max_edge_length` are not applied in this mode; only centroid
    /// points are inserted.
    #[must_use]
    pub fn with_refinement<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&[Point2; 3], f64) -> bool + 'a,
    {
        self.refinement = Some(Box::new(predicate));
        self
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has fewer than three points, contains
    /// duplicate or non-finite points, has a segment that is degenerate,
    /// out of range or crossing another segment, or if a parameter is
    /// invalid.
    pub fn execute(&self) -> Result<TriangleMesh> {
        self.validate_params()?;

        let mut cdt = Cdt::new();
        let handles = insert_points(&mut cdt, &self.curve.points)?;
        insert_constraints(&mut cdt, &handles, self.curve)?;

        if let Some(predicate) = &self.refinement {
            self.refine_with(&mut cdt, predicate.as_ref())?;
        } else {
            self.refine_quality(&mut cdt);
        }

        let interior = interior_faces(&cdt, &self.params.holes);
        let points: Vec<Point2> = cdt
            .vertices()
            .map(|v| {
                let p = v.position();
                Point2::new(p.x, p.y)
            })
            .collect();
        let triangles: Vec<[usize; 3]> = cdt
            .inner_faces()
            .filter(|f| interior.contains(&f.fix()))
            .map(|f| f.vertices().map(|v| v.fix().index()))
            .collect();

        tracing::debug!(
            input_points = self.curve.points.len(),
            segments = self.curve.segments.len(),
            points = points.len(),
            triangles = triangles.len(),
            "triangulated curve set"
        );

        Ok(TriangleMesh { points, triangles })
    }

    fn validate_params(&self) -> Result<()> {
        if let Some(h) = self.params.max_edge_length {
            if !(h.is_finite() && h > 0.0) {
                return Err(MeshError::InvalidParameter {
                    parameter: "max_edge_length",
                    value: h,
                }
                .into());
            }
        }
        let angle = self.params.min_angle_deg;
        if !(angle.is_finite() && angle >= 0.0) {
            return Err(MeshError::InvalidParameter {
                parameter: "min_angle_deg",
                value: angle,
            }
            .into());
        }
        if self.params.holes.iter().any(|h| !is_finite_point(h)) {
            return Err(MeshError::InvalidParameter {
                parameter: "holes",
                value: f64::NAN,
            }
            .into());
        }
        Ok(())
    }

    /// Size and angle refinement over the whole hull.
    ///
    /// Region selection happens afterwards in [`interior_faces`], so faces
    /// outside the region are refined too.
    fn refine_quality(&self, cdt: &mut Cdt) {
        let mut parameters = RefinementParameters::<f64>::new()
            .exclude_outer_faces(false)
            .with_angle_limit(AngleLimit::from_deg(self.params.min_angle_deg))
            .with_max_additional_vertices(self.params.max_additional_vertices);
        if let Some(h) = self.params.max_edge_length {
            parameters = parameters.with_max_allowed_area(0.5 * h * h);
        }

        let before = cdt.num_vertices();
        let result = cdt.refine(parameters);
        if !result.refinement_complete {
            tracing::warn!(
                budget = self.params.max_additional_vertices,
                "mesh refinement stopped before reaching its targets"
            );
        }
        tracing::debug!(steiner_points = cdt.num_vertices() - before, "refined mesh");
    }

    /// Centroid splitting driven by a caller predicate.
    fn refine_with(
        &self,
        cdt: &mut Cdt,
        predicate: &dyn Fn(&[Point2; 3], f64) -> bool,
    ) -> Result<()> {
        let budget = self.params.max_additional_vertices;
        let mut inserted = 0;

        for round in 0..self.params.max_refinement_rounds {
            let interior = interior_faces(cdt, &self.params.holes);
            let flagged: Vec<Point2> = cdt
                .inner_faces()
                .filter(|f| interior.contains(&f.fix()))
                .filter_map(|f| {
                    let [a, b, c] = f.vertices().map(|v| {
                        let p = v.position();
                        Point2::new(p.x, p.y)
                    });
                    let area = triangle_area(&a, &b, &c);
                    predicate(&[a, b, c], area).then(|| triangle_centroid(&a, &b, &c))
                })
                .collect();

            if flagged.is_empty() {
                tracing::debug!(round, inserted, "custom refinement converged");
                return Ok(());
            }

            for centroid in flagged {
                if inserted >= budget {
                    tracing::warn!(budget, "custom refinement ran out of vertices");
                    return Ok(());
                }
                cdt.insert(SpadePoint2::new(centroid.x, centroid.y))
                    .map_err(|e: InsertionError| MeshError::Insertion(e.to_string()))?;
                inserted += 1;
            }
        }

        tracing::warn!(
            rounds = self.params.max_refinement_rounds,
            inserted,
            "custom refinement stopped after its round limit"
        );
        Ok(())
    }
}

fn insert_points(cdt: &mut Cdt, points: &[Point2]) -> Result<Vec<FixedVertexHandle>> {
    if points.len() < 3 {
        return Err(MeshError::TooFewPoints(points.len()).into());
    }

    let mut handles = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let handle = cdt
            .insert(SpadePoint2::new(p.x, p.y))
            .map_err(|e: InsertionError| MeshError::Insertion(format!("point {i}: {e}")))?;
        if handle.index() != i {
            return Err(MeshError::DuplicatePoint {
                point: i,
                original: handle.index(),
            }
            .into());
        }
        handles.push(handle);
    }
    Ok(handles)
}

fn insert_constraints(cdt: &mut Cdt, handles: &[FixedVertexHandle], curve: &Curve) -> Result<()> {
    for (k, seg) in curve.segments.iter().enumerate() {
        let lookup = |point: usize| {
            handles.get(point).copied().ok_or(MeshError::PointOutOfRange {
                segment: k,
                point,
                len: handles.len(),
            })
        };
        let from = lookup(seg.start)?;
        let to = lookup(seg.end)?;
        if from == to {
            return Err(MeshError::DegenerateSegment(k).into());
        }

        // Repeated segments are already constrained.
        if let Some(edge) = cdt.get_edge_from_neighbors(from, to) {
            if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                continue;
            }
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(MeshError::IntersectingSegments(k).into());
        }
        cdt.add_constraint(from, to);
    }
    Ok(())
}
