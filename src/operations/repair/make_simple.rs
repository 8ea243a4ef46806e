use super::cleanup::{cancel_backtracks, resolve_pinches};
use crate::arrangement::Arrangement;
use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::{ExactPoint, Point2};
use crate::operations::query::SignedArea;

/// Replaces a possibly self-intersecting polygon by its outer boundary.
///
/// The polygon's edges are inserted into an exact planar arrangement and the
/// first hole of the unbounded face is walked once around. Loops and inner
/// detail enclosed by that boundary disappear, as do dangling edges that
/// enclose no area; a simple polygon comes back
/// unchanged up to the choice of its first vertex.
///
/// Only the first hole is used. If the input consists of regions that touch
/// only at isolated points or not at all, the remaining regions are lost.
pub struct MakeSimple<'a> {
    polygon: &'a Polygon,
    keep_pinch_vertices: bool,
    preserve_winding: bool,
}

impl<'a> MakeSimple<'a> {
    /// Creates a new `MakeSimple` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            keep_pinch_vertices: false,
            preserve_winding: true,
        }
    }

    /// Keeps vertices the boundary passes through more than once.
    ///
    /// By default the boundary is cut open at such vertices, so that lobes
    /// touching at a single point are joined by a straight edge and the
    /// result stays simple. Dangling edges are removed either way.
    #[must_use]
    pub fn keep_pinch_vertices(mut self, keep: bool) -> Self {
        self.keep_pinch_vertices = keep;
        self
    }

    /// Orients the result like the input when the input has positive signed
    /// area. When disabled, the boundary is always returned clockwise.
    #[must_use]
    pub fn preserve_winding(mut self, preserve: bool) -> Self {
        self.preserve_winding = preserve;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NoHole` if the polygon has no edge of nonzero
    /// length, `GeometryError::DegenerateBoundary` if the edges enclose no
    /// area, `GeometryError::UnresolvedPinch` if the boundary cannot be cut
    /// open at a pinch vertex, and a `TopologyError` if the boundary cannot
    /// be walked to closure.
    pub fn execute(&self) -> Result<Polygon> {
        let mut segments = Vec::with_capacity(self.polygon.len());
        for seg in self.polygon.segments() {
            segments.push((
                ExactPoint::from_point2(&seg.start)?,
                ExactPoint::from_point2(&seg.end)?,
            ));
        }

        let arrangement = Arrangement::from_segments(&segments)?;
        let outer = arrangement.face(arrangement.unbounded_face())?;
        let Some(&first_hole) = outer.holes.first() else {
            return Err(GeometryError::NoHole.into());
        };
        if outer.holes.len() > 1 {
            tracing::warn!(
                holes = outer.holes.len(),
                "unbounded face has several holes, using the first"
            );
        }

        // The unbounded face lies to the left, so the walk runs clockwise.
        let mut boundary: Vec<&ExactPoint> = Vec::new();
        for h in arrangement.ccb_halfedges(first_hole)? {
            boundary.push(arrangement.target(h)?);
        }

        cancel_backtracks(&mut boundary);
        if boundary.len() < 3 {
            return Err(GeometryError::DegenerateBoundary(boundary.len()).into());
        }
        if !self.keep_pinch_vertices {
            boundary = resolve_pinches(boundary)?;
        }

        if self.preserve_winding && SignedArea::new(self.polygon).execute() > 0.0 {
            boundary.reverse();
        }

        let points = boundary
            .into_iter()
            .map(ExactPoint::to_point2)
            .collect::<Result<Vec<Point2>>>()?;
        tracing::debug!(
            input = self.polygon.len(),
            output = points.len(),
            "outer boundary extracted"
        );
        Polygon::new(points)
    }
}
