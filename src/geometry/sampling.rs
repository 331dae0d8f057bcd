use crate::error::{CurveError, Result};

/// Controls how many points a curve generator places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    /// Use exactly this many points.
    Points(usize),
    /// Derive the count from the curve length so edges are about this long.
    EdgeLength(f64),
}

impl Sampling {
    /// Resolves the point count for a curve of the given `length`.
    ///
    /// `EdgeLength(h)` yields `floor(length / h) + 1`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidParameter` for a zero point count or an
    /// edge length that is not a positive finite number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn point_count(self, length: f64) -> Result<usize> {
        match self {
            Self::Points(0) => Err(CurveError::InvalidParameter {
                parameter: "num_points",
                value: 0.0,
            }
            .into()),
            Self::Points(n) => Ok(n),
            Self::EdgeLength(h) => {
                if !(h.is_finite() && h > 0.0) {
                    return Err(CurveError::InvalidParameter {
                        parameter: "edge_length",
                        value: h,
                    }
                    .into());
                }
                Ok((length.abs() / h).floor() as usize + 1)
            }
        }
    }

    /// Splits the sampling of a closed four-sided outline across each side.
    #[must_use]
    pub fn per_side(self) -> Self {
        match self {
            Self::Points(n) => Self::Points(n / 4),
            Self::EdgeLength(h) => Self::EdgeLength(h),
        }
    }
}
