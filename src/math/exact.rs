//! Exact rational geometry used by the arrangement.
//!
//! Every finite `f64` converts losslessly into a [`BigRational`], so points,
//! intersections and orientation signs computed here carry no rounding error.
//! The only lossy step is [`ExactPoint::to_point2`].

use std::cmp::Ordering;

use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::{Orientation, Point2};
use crate::error::{GeometryError, Result};

/// A point with arbitrary-precision rational coordinates.
///
/// The derived ordering is lexicographic: by `x`, then by `y`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactPoint {
    pub x: BigRational,
    pub y: BigRational,
}

impl ExactPoint {
    /// Creates a point from rational coordinates.
    #[must_use]
    pub fn new(x: BigRational, y: BigRational) -> Self {
        Self { x, y }
    }

    /// Converts a double-precision point without rounding.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InexactConversion` if a coordinate is not finite.
    pub fn from_point2(p: &Point2) -> Result<Self> {
        let convert = |v: f64| {
            BigRational::from_float(v)
                .ok_or_else(|| GeometryError::InexactConversion(format!("{v} has no rational value")))
        };
        Ok(Self::new(convert(p.x)?, convert(p.y)?))
    }

    /// Rounds the point to the nearest double-precision point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InexactConversion` if a coordinate is outside
    /// the `f64` range.
    pub fn to_point2(&self) -> Result<Point2> {
        let convert = |v: &BigRational| {
            v.to_f64()
                .filter(|f| f.is_finite())
                .ok_or_else(|| GeometryError::InexactConversion(format!("{v}")))
        };
        Ok(Point2::new(convert(&self.x)?, convert(&self.y)?))
    }

    /// Point `self + (to - self) * t`.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: &BigRational) -> Self {
        Self::new(
            &self.x + (&to.x - &self.x) * t,
            &self.y + (&to.y - &self.y) * t,
        )
    }
}

/// Cross product of `a - o` and `b - o`.
#[must_use]
pub fn cross(o: &ExactPoint, a: &ExactPoint, b: &ExactPoint) -> BigRational {
    (&a.x - &o.x) * (&b.y - &o.y) - (&a.y - &o.y) * (&b.x - &o.x)
}

/// Exact orientation of `c` relative to the directed line `a -> b`.
#[must_use]
pub fn orient(a: &ExactPoint, b: &ExactPoint, c: &ExactPoint) -> Orientation {
    Orientation::from_ordering(cross(a, b, c).cmp(&BigRational::zero()))
}

/// Compares the directions of two nonzero vectors by polar angle in `[0, 2pi)`.
#[must_use]
pub fn compare_angle(
    (ax, ay): (&BigRational, &BigRational),
    (bx, by): (&BigRational, &BigRational),
) -> Ordering {
    let half = |x: &BigRational, y: &BigRational| -> u8 {
        let zero = BigRational::zero();
        if *y > zero || (y.is_zero() && *x > zero) {
            0
        } else {
            1
        }
    };
    half(ax, ay).cmp(&half(bx, by)).then_with(|| {
        let c = ax * by - ay * bx;
        BigRational::zero().cmp(&c)
    })
}

/// Twice the signed area of a closed vertex cycle.
#[must_use]
pub fn doubled_area(cycle: &[&ExactPoint]) -> BigRational {
    let n = cycle.len();
    let mut sum = BigRational::zero();
    for i in 0..n {
        let a = cycle[i];
        let b = cycle[(i + 1) % n];
        sum += &a.x * &b.y - &b.x * &a.y;
    }
    sum
}

/// Returns `true` if `p` lies strictly inside the closed vertex cycle.
///
/// `p` must not lie on the cycle itself.
#[must_use]
pub fn strictly_inside(p: &ExactPoint, cycle: &[&ExactPoint]) -> bool {
    let n = cycle.len();
    let mut inside = false;
    for i in 0..n {
        let a = cycle[i];
        let b = cycle[(i + 1) % n];
        if (a.y > p.y) != (b.y > p.y) {
            let o = orient(a, b, p);
            let upward = b.y > a.y;
            if (upward && o == Orientation::CounterClockwise)
                || (!upward && o == Orientation::Clockwise)
            {
                inside = !inside;
            }
        }
    }
    inside
}

/// Returns `true` if `p` lies on the closed segment `a`-`b`.
#[must_use]
pub fn on_segment(p: &ExactPoint, a: &ExactPoint, b: &ExactPoint) -> bool {
    orient(a, b, p) == Orientation::Collinear && in_box(p, a, b)
}

/// Intersection of two closed segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentIntersection {
    /// The segments are disjoint.
    None,
    /// The segments share exactly one point.
    Point(ExactPoint),
    /// The segments are collinear and share the segment between the two
    /// points (ordered lexicographically).
    Overlap(ExactPoint, ExactPoint),
}

/// Computes the exact intersection of segments `a0`-`a1` and `b0`-`b1`.
///
/// Both segments must have nonzero length.
#[must_use]
pub fn intersect_segments(
    a0: &ExactPoint,
    a1: &ExactPoint,
    b0: &ExactPoint,
    b1: &ExactPoint,
) -> SegmentIntersection {
    debug_assert!(a0 != a1 && b0 != b1, "zero-length segment");

    let rx = &a1.x - &a0.x;
    let ry = &a1.y - &a0.y;
    let sx = &b1.x - &b0.x;
    let sy = &b1.y - &b0.y;
    let qx = &b0.x - &a0.x;
    let qy = &b0.y - &a0.y;

    let denom = &rx * &sy - &ry * &sx;
    let zero = BigRational::zero();
    let one = BigRational::from_integer(1.into());

    if !denom.is_zero() {
        let t = (&qx * &sy - &qy * &sx) / &denom;
        let u = (&qx * &ry - &qy * &rx) / &denom;
        if t >= zero && t <= one && u >= zero && u <= one {
            return SegmentIntersection::Point(a0.lerp(a1, &t));
        }
        return SegmentIntersection::None;
    }

    // Parallel: only collinear segments can share points.
    if !(&qx * &ry - &qy * &rx).is_zero() {
        return SegmentIntersection::None;
    }

    let mut shared: Vec<&ExactPoint> = Vec::with_capacity(4);
    for p in [b0, b1] {
        if in_box(p, a0, a1) {
            shared.push(p);
        }
    }
    for p in [a0, a1] {
        if in_box(p, b0, b1) {
            shared.push(p);
        }
    }
    shared.sort();
    shared.dedup();

    match shared.as_slice() {
        [] => SegmentIntersection::None,
        [p] => SegmentIntersection::Point((*p).clone()),
        [first, .., last] => SegmentIntersection::Overlap((*first).clone(), (*last).clone()),
    }
}

fn in_box(p: &ExactPoint, a: &ExactPoint, b: &ExactPoint) -> bool {
    let (xmin, xmax) = if a.x <= b.x { (&a.x, &b.x) } else { (&b.x, &a.x) };
    let (ymin, ymax) = if a.y <= b.y { (&a.y, &b.y) } else { (&b.y, &a.y) };
    p.x >= *xmin && p.x <= *xmax && p.y >= *ymin && p.y <= *ymax
}
