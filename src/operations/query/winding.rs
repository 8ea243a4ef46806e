use crate::geometry::Polygon;

use super::SignedArea;

/// Winding direction of a polygon's vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero signed area.
    Degenerate,
}

impl Winding {
    /// Returns `true` for counter-clockwise winding.
    #[must_use]
    pub fn is_counterclockwise(self) -> bool {
        self == Self::CounterClockwise
    }

    /// Returns `true` for clockwise winding.
    #[must_use]
    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }
}

/// Determines the winding direction from the sign of the signed area.
pub struct WindingDirection<'a> {
    polygon: &'a Polygon,
}

impl<'a> WindingDirection<'a> {
    /// Creates a new `WindingDirection` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Winding {
        let area = SignedArea::new(self.polygon).execute();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }
}
