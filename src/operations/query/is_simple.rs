use std::cmp::Ordering;

use crate::geometry::Polygon;
use crate::math::predicates::segments_intersect;
use crate::math::{lex_cmp, orient2d, Orientation, Point2};

/// Checks whether a polygon is simple.
///
/// Non-adjacent edges must not share any point, adjacent edges may only meet
/// at their common vertex, and no two vertices may coincide. Every edge pair
/// is tested, which is quadratic in the vertex count.
pub struct IsSimple<'a> {
    polygon: &'a Polygon,
}

impl<'a> IsSimple<'a> {
    /// Creates a new `IsSimple` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let points = self.polygon.points();
        let n = points.len();

        if has_coincident_vertices(points) {
            return false;
        }

        for i in 0..n {
            let a0 = &points[i];
            let a1 = &points[(i + 1) % n];
            for j in (i + 1)..n {
                let b0 = &points[j];
                let b1 = &points[(j + 1) % n];
                let clash = if j == i + 1 {
                    folds_back(a0, a1, b1)
                } else if i == 0 && j == n - 1 {
                    folds_back(b0, a0, a1)
                } else {
                    segments_intersect(a0, a1, b0, b1)
                };
                if clash {
                    return false;
                }
            }
        }
        true
    }
}

fn has_coincident_vertices(points: &[Point2]) -> bool {
    let mut sorted: Vec<&Point2> = points.iter().collect();
    sorted.sort_by(|a, b| lex_cmp(a, b));
    sorted
        .windows(2)
        .any(|w| lex_cmp(w[0], w[1]) == Ordering::Equal)
}

/// Returns `true` if the edges `prev -> shared -> next` overlap beyond
/// `shared`, i.e. the boundary reverses onto itself.
fn folds_back(prev: &Point2, shared: &Point2, next: &Point2) -> bool {
    orient2d(prev, shared, next) == Orientation::Collinear
        && lex_cmp(prev, shared) == lex_cmp(next, shared)
}
