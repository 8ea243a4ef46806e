use std::cmp::Ordering;

use crate::geometry::Polygon;
use crate::math::{lex_cmp, orient2d, Orientation};

/// Checks whether a polygon is convex.
///
/// All vertex turns must agree in sign, collinear vertices being compatible
/// with either sign, and the boundary must wind around exactly once. The
/// result is only meaningful for simple polygons; simplicity is not checked.
pub struct IsConvex<'a> {
    polygon: &'a Polygon,
}

impl<'a> IsConvex<'a> {
    /// Creates a new `IsConvex` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let points = self.polygon.points();
        let n = points.len();

        let mut turn = Orientation::Collinear;
        for i in 0..n {
            let prev = &points[(i + n - 1) % n];
            let next = &points[(i + 1) % n];
            match orient2d(prev, &points[i], next) {
                Orientation::Collinear => {}
                o if turn == Orientation::Collinear => turn = o,
                o if o != turn => return false,
                _ => {}
            }
        }

        // A boundary that turns only one way can still loop several times
        // (star polygons). Going once around, the lexicographic direction of
        // travel flips at most twice.
        let directions: Vec<Ordering> = (0..n)
            .map(|i| lex_cmp(&points[i], &points[(i + 1) % n]))
            .filter(|o| *o != Ordering::Equal)
            .collect();
        let m = directions.len();
        let flips = (0..m)
            .filter(|&i| directions[i] != directions[(i + 1) % m])
            .count();
        flips <= 2
    }
}
