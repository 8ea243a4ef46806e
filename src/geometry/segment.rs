use crate::math::Point2;

/// A directed polygon edge from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
