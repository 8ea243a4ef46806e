//! Planar arrangement of line segments as a doubly-connected edge list.
//!
//! All coordinates are exact rationals. An arrangement is built once from a
//! segment set and then only queried.

mod build;
pub mod ccb;
pub mod face;
pub mod halfedge;
pub mod vertex;

pub use ccb::CcbCirculator;
pub use face::{FaceData, FaceId};
pub use halfedge::{HalfedgeData, HalfedgeId};
pub use vertex::{VertexData, VertexId};

use slotmap::SlotMap;

use crate::error::TopologyError;
use crate::math::ExactPoint;

/// Arena owning the vertices, halfedges and faces of an arrangement.
///
/// Entities reference each other via typed IDs (generational indices).
#[derive(Debug)]
pub struct Arrangement {
    vertices: SlotMap<VertexId, VertexData>,
    halfedges: SlotMap<HalfedgeId, HalfedgeData>,
    faces: SlotMap<FaceId, FaceData>,
    unbounded_face: FaceId,
}

impl Arrangement {
    /// Creates an arrangement with no curves: a single unbounded face.
    fn empty() -> Self {
        let mut faces = SlotMap::with_key();
        let unbounded_face = faces.insert(FaceData::default());
        Self {
            vertices: SlotMap::with_key(),
            halfedges: SlotMap::with_key(),
            faces,
            unbounded_face,
        }
    }

    /// The single face extending to infinity.
    #[must_use]
    pub fn unbounded_face(&self) -> FaceId {
        self.unbounded_face
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (pairs of twin halfedges).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.halfedges.len() / 2
    }

    /// Number of faces, including the unbounded face.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    /// Returns the halfedge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn halfedge(&self, id: HalfedgeId) -> Result<&HalfedgeData, TopologyError> {
        self.halfedges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("halfedge"))
    }

    /// Returns the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arrangement.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))
    }

    /// Location of the vertex a halfedge leaves.
    ///
    /// # Errors
    ///
    /// Returns an error if the halfedge or its origin is not found.
    pub fn source(&self, id: HalfedgeId) -> Result<&ExactPoint, TopologyError> {
        let origin = self.halfedge(id)?.origin;
        Ok(&self.vertex(origin)?.point)
    }

    /// Location of the vertex a halfedge enters.
    ///
    /// # Errors
    ///
    /// Returns an error if the halfedge, its twin or the target is not found.
    pub fn target(&self, id: HalfedgeId) -> Result<&ExactPoint, TopologyError> {
        self.source(self.halfedge(id)?.twin)
    }

    /// Circulates the boundary cycle containing `start`, beginning at `start`.
    #[must_use]
    pub fn ccb(&self, start: HalfedgeId) -> CcbCirculator<'_> {
        CcbCirculator::new(self, start)
    }

    /// Collects the halfedges of the boundary cycle containing `start`.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::OpenCycle` if following `next` links does not
    /// lead back to `start`, and `TopologyError::EntityNotFound` if `start`
    /// does not exist.
    pub fn ccb_halfedges(&self, start: HalfedgeId) -> Result<Vec<HalfedgeId>, TopologyError> {
        self.halfedge(start)?;
        let limit = self.halfedges.len();
        let cycle: Vec<HalfedgeId> = self.ccb(start).take(limit + 1).collect();
        if cycle.len() > limit {
            return Err(TopologyError::OpenCycle);
        }
        let last = cycle.last().copied().unwrap_or(start);
        if self.halfedge(last)?.next != start {
            return Err(TopologyError::OpenCycle);
        }
        Ok(cycle)
    }
}
