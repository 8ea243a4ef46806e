//! Floating-point geometric predicates with an exact fallback.
//!
//! Inputs are plain `f64` points. Each predicate first evaluates in double
//! precision and checks the result against a static error bound (Shewchuk,
//! "Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//! Predicates", 1997). Only when the bound cannot certify the sign is the
//! determinant recomputed over rationals, which is exact for every finite
//! double.

use std::cmp::Ordering;

use num_rational::BigRational;
use num_traits::Zero;

use super::Point2;

/// Half an ulp of 1.0.
const EPSILON: f64 = f64::EPSILON * 0.5;

/// Relative error bound of the double-precision `orient2d` determinant.
const CCW_ERRBOUND_A: f64 = (3.0 + 16.0 * EPSILON) * EPSILON;

/// Result of a three-point orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `c` lies to the left of the directed line `a -> b`.
    CounterClockwise,
    /// `c` lies to the right of the directed line `a -> b`.
    Clockwise,
    /// The three points are collinear.
    Collinear,
}

impl Orientation {
    /// Maps the sign of a determinant to an orientation.
    #[must_use]
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Self::CounterClockwise,
            Ordering::Less => Self::Clockwise,
            Ordering::Equal => Self::Collinear,
        }
    }

    fn from_det(det: f64) -> Self {
        Self::from_ordering(det.partial_cmp(&0.0).unwrap_or(Ordering::Equal))
    }
}

/// Orientation of `c` relative to the directed line through `a` and `b`.
///
/// The sign is exact for finite inputs.
#[must_use]
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return Orientation::from_det(det);
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return Orientation::from_det(det);
        }
        -det_left - det_right
    } else {
        return Orientation::from_det(det);
    };

    let err_bound = CCW_ERRBOUND_A * det_sum;
    if det >= err_bound || -det >= err_bound {
        return Orientation::from_det(det);
    }
    orient2d_exact(a, b, c).unwrap_or_else(|| Orientation::from_det(det))
}

/// Rational evaluation of the `orient2d` determinant.
///
/// Returns `None` if a coordinate is not finite.
fn orient2d_exact(a: &Point2, b: &Point2, c: &Point2) -> Option<Orientation> {
    let r = |v: f64| BigRational::from_float(v);
    let (ax, ay) = (r(a.x)?, r(a.y)?);
    let (bx, by) = (r(b.x)?, r(b.y)?);
    let (cx, cy) = (r(c.x)?, r(c.y)?);
    let det = (&ax - &cx) * (&by - &cy) - (&ay - &cy) * (&bx - &cx);
    Some(Orientation::from_ordering(det.cmp(&BigRational::zero())))
}

/// Returns `true` if `p` lies on the closed segment `a`-`b`.
#[must_use]
pub fn on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    orient2d(a, b, p) == Orientation::Collinear && in_box(p, a, b)
}

/// Returns `true` if `p` lies in the axis-aligned box spanned by `a` and `b`.
///
/// Combined with a collinearity test this decides segment incidence.
#[must_use]
pub fn in_box(p: &Point2, a: &Point2, b: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Lexicographic comparison by `x`, then `y`.
///
/// `0.0` and `-0.0` compare equal. Coordinates are assumed finite.
#[must_use]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    let cmp = |u: f64, v: f64| u.partial_cmp(&v).unwrap_or(Ordering::Equal);
    cmp(a.x, b.x).then_with(|| cmp(a.y, b.y))
}

/// Returns `true` if the closed segments `a0`-`a1` and `b0`-`b1` share a point.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orient2d(a0, a1, b0);
    let o2 = orient2d(a0, a1, b1);
    let o3 = orient2d(b0, b1, a0);
    let o4 = orient2d(b0, b1, a1);

    if o1 != o2
        && o3 != o4
        && o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear
    {
        return true;
    }

    (o1 == Orientation::Collinear && in_box(b0, a0, a1))
        || (o2 == Orientation::Collinear && in_box(b1, a0, a1))
        || (o3 == Orientation::Collinear && in_box(a0, b0, b1))
        || (o4 == Orientation::Collinear && in_box(a1, b0, b1))
}
