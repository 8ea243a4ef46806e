use crate::error::{InputError, Result};
use crate::math::Point2;

use super::segment::Segment;

/// A closed 2D polygon given by its vertices in order.
///
/// The last vertex connects back to the first; no closing duplicate is
/// stored. Construction guarantees at least 3 vertices with finite
/// coordinates. Repeated vertices are kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `InputError::TooFewPoints` for fewer than 3 vertices and
    /// `InputError::NonFiniteCoordinate` if a coordinate is NaN or infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(InputError::TooFewPoints(points.len()).into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InputError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { points })
    }

    /// Creates a polygon from parallel x- and y-coordinate sequences.
    ///
    /// # Errors
    ///
    /// Returns `InputError::LengthMismatch` if the sequences differ in length,
    /// plus the errors of [`Polygon::new`].
    pub fn from_coords(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(InputError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            }
            .into());
        }
        Self::new(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Point2::new(x, y))
                .collect(),
        )
    }

    /// The vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a polygon has at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `n` boundary segments `(p0, p1), …, (pn-1, p0)`.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Returns the polygon with its vertex order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Total boundary length, including the closing segment.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Axis-aligned bounding box as `[xmin, ymin, xmax, ymax]`.
    #[must_use]
    pub fn bounding_box(&self) -> [f64; 4] {
        self.points.iter().fold(
            [
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ],
            |[xmin, ymin, xmax, ymax], p| [xmin.min(p.x), ymin.min(p.y), xmax.max(p.x), ymax.max(p.y)],
        )
    }

    /// Splits the vertices back into x- and y-coordinate sequences.
    #[must_use]
    pub fn to_coords(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Packs the vertices as `[x0, …, xm-1, y0, …, ym-1]`.
    #[must_use]
    pub fn to_packed(&self) -> Vec<f64> {
        let (mut xs, ys) = self.to_coords();
        xs.extend(ys);
        xs
    }
}
