//! Meshes an annulus with a rectangular notch and prints it as SVG.
//!
//! ```text
//! cargo run --example annulus > annulus.svg
//! RUST_LOG=meshtools=debug cargo run --example annulus -- --edge-length 0.05
//! ```

use clap::Parser;
use meshtools::geometry::{Curve, Sampling};
use meshtools::math::Point2;
use meshtools::operations::boundary::ConnectBoundary;
use meshtools::operations::creation::{MakeCircle, MakeRectangle};
use meshtools::render::{render_svg, SvgStyle};
use meshtools::tessellation::TriMesh;

#[derive(Parser)]
struct Args {
    /// Target edge length for sampling and refinement.
    #[arg(long)]
    #[clap(default_value_t = 0.1)]
    edge_length: f64,
}

fn main() -> meshtools::Result<()> {
    // Default: WARN for everything, INFO for meshtools.
    // Override with RUST_LOG env var (e.g. RUST_LOG=meshtools=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("annulus=info".parse().unwrap_or_default())
        .add_directive("meshtools=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let edge_length = args.edge_length;

    let outer = MakeCircle::new(Point2::origin(), 1.0)
        .with_sampling(Sampling::EdgeLength(edge_length))
        .execute()?;
    let inner = MakeCircle::new(Point2::origin(), 0.4)
        .with_sampling(Sampling::EdgeLength(edge_length))
        .execute()?;
    let notch = MakeRectangle::new(Point2::new(0.55, -0.1), Point2::new(0.8, 0.1))
        .with_sampling(Sampling::EdgeLength(edge_length))
        .execute()?;

    let mut pslg = Curve::default();
    pslg.append(&outer);
    pslg.append(&inner);
    pslg.append(&notch);

    let mesh = TriMesh::new(&pslg)
        .with_edge_length(edge_length)
        .with_holes(vec![Point2::origin(), Point2::new(0.675, 0.0)])
        .execute()?;

    let edges = mesh.edges();
    let boundary = ConnectBoundary::new(&edges.boundary, &mesh.points)
        .starting_at(vec![Point2::new(-1.0, 0.0), Point2::new(0.0, -0.4)])
        .execute()?;

    tracing::info!(
        points = mesh.points.len(),
        triangles = mesh.triangles.len(),
        edges = edges.all.len(),
        boundaries = boundary.boundary_count(),
        area = mesh.area(),
        "meshed annulus"
    );
    for (k, segments) in boundary.boundaries().enumerate() {
        if let Some(first) = segments.first() {
            let p = mesh.points[first.start];
            tracing::info!(boundary = k, segments = segments.len(), x = p.x, y = p.y, "boundary");
        }
    }

    print!("{}", render_svg(&mesh, &SvgStyle::default()));
    Ok(())
}
