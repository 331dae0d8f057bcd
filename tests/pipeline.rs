//! End-to-end: build curves, mesh them, recover and reorder the boundaries.

#![allow(clippy::unwrap_used)]

use std::f64::consts::PI;

use approx::assert_relative_eq;
use meshtools::geometry::{Curve, Sampling};
use meshtools::math::polygon_2d::signed_area;
use meshtools::math::Point2;
use meshtools::operations::boundary::{find_closest_node, ConnectBoundary, DistanceConstraint};
use meshtools::operations::creation::{JoinCurves, MakeCircle, MakeLine, MakePolyline};
use meshtools::render::{render_svg, SvgStyle};
use meshtools::tessellation::{MeshParams, TriMesh};

fn annulus() -> Curve {
    let outer = MakeCircle::new(Point2::origin(), 2.0)
        .with_sampling(Sampling::Points(32))
        .execute()
        .unwrap();
    let inner = MakeCircle::new(Point2::origin(), 1.0)
        .with_sampling(Sampling::Points(16))
        .execute()
        .unwrap();
    outer.with(&inner)
}

fn loop_points(mesh_points: &[Point2], segments: &[meshtools::geometry::Segment]) -> Vec<Point2> {
    segments.iter().map(|s| mesh_points[s.start]).collect()
}

#[test]
fn annulus_boundaries_round_trip() {
    let curve = annulus();
    let mesh = TriMesh::new(&curve)
        .with_edge_length(0.4)
        .with_holes(vec![Point2::origin()])
        .execute()
        .unwrap();
    let edges = mesh.edges();

    let sorted = ConnectBoundary::new(&edges.boundary, &mesh.points)
        .execute()
        .unwrap();
    assert_eq!(sorted.boundary_count(), 2);
    assert_eq!(sorted.segments.len(), edges.boundary.len());

    let mut areas: Vec<f64> = sorted
        .boundaries()
        .map(|segs| signed_area(&loop_points(&mesh.points, segs)))
        .collect();
    areas.sort_by(f64::total_cmp);

    // Outer loop runs counter-clockwise, the hole clockwise.
    let outer = 0.5 * 32.0 * 4.0 * (2.0 * PI / 32.0).sin();
    let inner = 0.5 * 16.0 * (2.0 * PI / 16.0).sin();
    assert_relative_eq!(areas[0], -inner, epsilon = 1e-9);
    assert_relative_eq!(areas[1], outer, epsilon = 1e-9);
    assert_relative_eq!(mesh.area(), outer - inner, epsilon = 1e-9);
}

#[test]
fn boundaries_start_at_requested_points() {
    let curve = annulus();
    let mesh = TriMesh::new(&curve)
        .with_edge_length(0.4)
        .with_holes(vec![Point2::origin()])
        .execute()
        .unwrap();
    let edges = mesh.edges();

    let west = Point2::new(-2.5, 0.0);
    let south = Point2::new(0.0, -0.9);
    let sorted = ConnectBoundary::new(&edges.boundary, &mesh.points)
        .starting_at(vec![west, south])
        .execute()
        .unwrap();

    let firsts: Vec<Point2> = sorted
        .starts
        .iter()
        .map(|&s| mesh.points[sorted.segments[s].start])
        .collect();
    // Input point 16 is (-2, 0) on the outer circle; 32 + 12 is (0, -1) on the inner.
    assert!(firsts.iter().any(|p| nalgebra::distance(p, &Point2::new(-2.0, 0.0)) < 1e-9));
    assert!(firsts.iter().any(|p| nalgebra::distance(p, &Point2::new(0.0, -1.0)) < 1e-9));
    for k in 0..sorted.boundary_count() {
        assert!(sorted.is_closed(k));
    }
}

#[test]
fn stitched_outline_meshes_as_one_region() {
    // Half disc: arc on top, chord below, joined into one closed curve.
    let arc = MakeCircle::new(Point2::origin(), 1.0)
        .with_angles(0.0, PI)
        .with_sampling(Sampling::Points(17))
        .execute()
        .unwrap();
    let chord = MakeLine::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0))
        .with_sampling(Sampling::Points(9))
        .execute()
        .unwrap();
    let outline = JoinCurves::new(&arc, &chord).execute().unwrap();
    assert!(outline.is_closed());

    let params = MeshParams {
        max_edge_length: Some(0.25),
        ..MeshParams::default()
    };
    let mesh = TriMesh::new(&outline).with_params(params).execute().unwrap();
    let sorted = ConnectBoundary::new(&mesh.edges().boundary, &mesh.points)
        .execute()
        .unwrap();
    assert_eq!(sorted.boundary_count(), 1);

    let expected = signed_area(&outline.points);
    assert_relative_eq!(mesh.area(), expected, epsilon = 1e-9);
}

#[test]
fn closest_nodes_on_a_polyline() {
    let zigzag = MakePolyline::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 0.0),
        Point2::new(3.0, 1.0),
    ])
    .execute()
    .unwrap();
    let nodes: Vec<usize> = (0..zigzag.len()).collect();
    let found = find_closest_node(
        &nodes,
        &zigzag.points,
        &[Point2::new(2.1, 0.2), Point2::new(10.0, 0.0)],
        &DistanceConstraint::Uniform(1.0),
    )
    .unwrap();
    assert_eq!(found[0].node, Some(2));
    assert_eq!(found[1].node, None);
}

#[test]
fn nested_circle_without_hole_is_meshed() {
    let curve = annulus();
    let mesh = TriMesh::new(&curve).with_edge_length(0.4).execute().unwrap();
    let sorted = ConnectBoundary::new(&mesh.edges().boundary, &mesh.points)
        .execute()
        .unwrap();
    // The inner circle is an interface, so only the outer loop is a boundary.
    assert_eq!(sorted.boundary_count(), 1);
    let outer = 0.5 * 32.0 * 4.0 * (2.0 * PI / 32.0).sin();
    assert_relative_eq!(mesh.area(), outer, epsilon = 1e-9);
}

#[test]
fn mesh_renders_to_svg() {
    let curve = annulus();
    let mesh = TriMesh::new(&curve).execute().unwrap();
    let svg = render_svg(&mesh, &SvgStyle::default());
    assert_eq!(svg.matches('z').count(), mesh.triangles.len());
}
