mod join_curves;
mod make_circle;
mod make_line;
mod make_polyline;
mod make_rectangle;

pub use join_curves::JoinCurves;
pub use make_circle::MakeCircle;
pub use make_line::MakeLine;
pub use make_polyline::MakePolyline;
pub use make_rectangle::MakeRectangle;

use crate::error::{CurveError, Result};
use crate::math::distance_2d::is_finite_point;
use crate::math::Point2;

/// Rejects points with NaN or infinite coordinates.
fn check_point(parameter: &'static str, p: &Point2) -> Result<()> {
    if is_finite_point(p) {
        return Ok(());
    }
    let value = if p.x.is_finite() { p.y } else { p.x };
    Err(CurveError::InvalidParameter { parameter, value }.into())
}
