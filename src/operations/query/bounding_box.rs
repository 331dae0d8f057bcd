use crate::math::Point2;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Width along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Computes the axis-aligned bounding box of a point set.
pub struct BoundingBox<'a> {
    points: &'a [Point2],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning `None` for an empty point set.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.points.split_first()?;
        let mut bb = Aabb {
            min: *first,
            max: *first,
        };
        for p in rest {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_of_scattered_points() {
        let pts = [
            Point2::new(1.0, -2.0),
            Point2::new(-3.0, 0.5),
            Point2::new(2.0, 4.0),
        ];
        let bb = BoundingBox::new(&pts).execute();
        assert_eq!(
            bb,
            Some(Aabb {
                min: Point2::new(-3.0, -2.0),
                max: Point2::new(2.0, 4.0),
            })
        );
        let bb = bb.unwrap_or(Aabb {
            min: Point2::origin(),
            max: Point2::origin(),
        });
        assert!((bb.width() - 5.0).abs() < 1e-12);
        assert!((bb.height() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::new(&[]).execute().is_none());
    }
}
