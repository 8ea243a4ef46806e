//! Flat functions over parallel coordinate slices.
//!
//! Each function builds a transient [`Polygon`] from `xs`/`ys`, evaluates
//! one operation and returns a plain value. Malformed input is reported as an
//! error, never as a default value.

use crate::error::{InputError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;
use crate::operations::query::{
    ContainsPoint, IsConvex, IsSimple, PointLocation, SignedArea, WindingDirection,
};
use crate::operations::repair::MakeSimple;

/// Returns `true` if the polygon is simple.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates.
pub fn is_simple(xs: &[f64], ys: &[f64]) -> Result<bool> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(IsSimple::new(&polygon).execute())
}

/// Returns `true` if the polygon is convex.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates.
pub fn is_convex(xs: &[f64], ys: &[f64]) -> Result<bool> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(IsConvex::new(&polygon).execute())
}

/// Classifies `point` as outside (`-1`), on the boundary (`0`) or inside
/// (`1`) of the polygon.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates or a non-finite point.
pub fn orientation(xs: &[f64], ys: &[f64], point: [f64; 2]) -> Result<i32> {
    let polygon = Polygon::from_coords(xs, ys)?;
    let point = query_point(point)?;
    Ok(PointLocation::new(&polygon, point).execute().into())
}

/// Returns `true` if `point` lies strictly inside the polygon.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates or a non-finite point.
pub fn contains_point(xs: &[f64], ys: &[f64], point: [f64; 2]) -> Result<bool> {
    let polygon = Polygon::from_coords(xs, ys)?;
    let point = query_point(point)?;
    Ok(ContainsPoint::new(&polygon, point).execute())
}

/// Returns `true` if the vertices run counter-clockwise.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates.
pub fn is_counterclockwise_oriented(xs: &[f64], ys: &[f64]) -> Result<bool> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(WindingDirection::new(&polygon).execute().is_counterclockwise())
}

/// Returns `true` if the vertices run clockwise.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates.
pub fn is_clockwise_oriented(xs: &[f64], ys: &[f64]) -> Result<bool> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(WindingDirection::new(&polygon).execute().is_clockwise())
}

/// Signed area; positive for counter-clockwise vertex order.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates.
pub fn signed_area(xs: &[f64], ys: &[f64]) -> Result<f64> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(SignedArea::new(&polygon).execute())
}

/// Outer simple boundary of the polygon, packed as
/// `[x0, …, xm-1, y0, …, ym-1]`.
///
/// # Errors
///
/// Returns an `InputError` for malformed coordinates and the errors of
/// [`MakeSimple::execute`].
pub fn make_poly_simple(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
    let polygon = Polygon::from_coords(xs, ys)?;
    Ok(MakeSimple::new(&polygon).execute()?.to_packed())
}

fn query_point([x, y]: [f64; 2]) -> Result<Point2> {
    if x.is_finite() && y.is_finite() {
        Ok(Point2::new(x, y))
    } else {
        Err(InputError::NonFiniteQueryPoint { x, y }.into())
    }
}
