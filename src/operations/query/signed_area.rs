use crate::geometry::Polygon;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise, zero for
/// degenerate or self-cancelling vertex sequences.
pub struct SignedArea<'a> {
    polygon: &'a Polygon,
}

impl<'a> SignedArea<'a> {
    /// Creates a new `SignedArea` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let points = self.polygon.points();
        let n = points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += points[i].x * points[j].y - points[j].x * points[i].y;
        }
        sum * 0.5
    }
}
