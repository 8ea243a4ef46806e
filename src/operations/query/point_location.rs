use crate::error::GeometryError;
use crate::geometry::Polygon;
use crate::math::predicates::on_segment;
use crate::math::{orient2d, Orientation, Point2};

/// Position of a point relative to a polygon's boundary.
///
/// The classification does not depend on the polygon's winding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientedSide {
    Outside = -1,
    OnBoundary = 0,
    Inside = 1,
}

impl From<OrientedSide> for i32 {
    fn from(side: OrientedSide) -> Self {
        side as i32
    }
}

impl TryFrom<i32> for OrientedSide {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Outside),
            0 => Ok(Self::OnBoundary),
            1 => Ok(Self::Inside),
            other => Err(GeometryError::UnclassifiedOrientation(other)),
        }
    }
}

/// Classifies a point as inside, outside, or on the boundary of a polygon.
///
/// A point is on the boundary only if it lies exactly on an edge; no
/// tolerance is applied. Interior is decided by even-odd crossing parity.
pub struct PointLocation<'a> {
    polygon: &'a Polygon,
    point: Point2,
}

impl<'a> PointLocation<'a> {
    /// Creates a new `PointLocation` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2) -> Self {
        Self { polygon, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> OrientedSide {
        let p = &self.point;
        let mut inside = false;
        for seg in self.polygon.segments() {
            let (a, b) = (&seg.start, &seg.end);
            if on_segment(p, a, b) {
                return OrientedSide::OnBoundary;
            }
            if (a.y > p.y) != (b.y > p.y) {
                let expected = if b.y > a.y {
                    Orientation::CounterClockwise
                } else {
                    Orientation::Clockwise
                };
                if orient2d(a, b, p) == expected {
                    inside = !inside;
                }
            }
        }
        if inside {
            OrientedSide::Inside
        } else {
            OrientedSide::Outside
        }
    }
}

/// Checks whether a point lies strictly inside a polygon.
///
/// Boundary points are not contained.
pub struct ContainsPoint<'a> {
    polygon: &'a Polygon,
    point: Point2,
}

impl<'a> ContainsPoint<'a> {
    /// Creates a new `ContainsPoint` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2) -> Self {
        Self { polygon, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        PointLocation::new(self.polygon, self.point).execute() == OrientedSide::Inside
    }
}
