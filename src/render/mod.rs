mod triplot;

pub use triplot::{document, render_svg};

/// Appearance of a rendered mesh.
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Width of the drawing in pixels; the height follows the aspect ratio.
    pub width: f64,
    /// Blank border around the mesh in pixels.
    pub margin: f64,
    /// Edge colour, any SVG paint value.
    pub stroke: String,
    /// Edge width in pixels.
    pub stroke_width: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 800.0,
            margin: 10.0,
            stroke: "#1f77b4".to_owned(),
            stroke_width: 0.75,
        }
    }
}
