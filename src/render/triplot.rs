use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::math::Point2;
use crate::operations::query::BoundingBox;
use crate::tessellation::TriangleMesh;

use super::SvgStyle;

/// Renders the edges of every triangle as an SVG document.
///
/// The mesh is scaled to `style.width` and the y axis points up.
#[must_use]
pub fn render_svg(mesh: &TriangleMesh, style: &SvgStyle) -> String {
    document(mesh, style).to_string()
}

/// Builds the document rendered by [`render_svg`].
#[must_use]
pub fn document(mesh: &TriangleMesh, style: &SvgStyle) -> Document {
    let bb = BoundingBox::new(&mesh.points).execute();
    let (min, scale, height) = match bb {
        Some(bb) if bb.width() > 0.0 || bb.height() > 0.0 => {
            let inner = (style.width - 2.0 * style.margin).max(1.0);
            let scale = inner / bb.width().max(bb.height());
            (bb.min, scale, bb.height() * scale + 2.0 * style.margin)
        }
        _ => (Point2::origin(), 1.0, 2.0 * style.margin),
    };
    let top = height - style.margin;
    let map = |p: &Point2| {
        (
            style.margin + (p.x - min.x) * scale,
            top - (p.y - min.y) * scale,
        )
    };

    let mut data = Data::new();
    for &[a, b, c] in &mesh.triangles {
        let (Some(pa), Some(pb), Some(pc)) =
            (mesh.points.get(a), mesh.points.get(b), mesh.points.get(c))
        else {
            continue;
        };
        data = data
            .move_to(map(pa))
            .line_to(map(pb))
            .line_to(map(pc))
            .close();
    }

    let edges = Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", style.stroke.as_str())
        .set("stroke-width", style.stroke_width)
        .set("stroke-linejoin", "round");

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", style.width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, style.width, height))
        .add(edges)
}
