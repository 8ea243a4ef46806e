use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a halfedge of an arrangement.
    pub struct HalfedgeId;
}

/// One directed side of an arrangement edge.
///
/// The incident face lies to the left of the halfedge. `next` and `prev`
/// link the halfedges of the same boundary cycle; `twin` is the opposite
/// side of the same edge.
#[derive(Debug, Clone)]
pub struct HalfedgeData {
    /// Vertex the halfedge leaves.
    pub origin: VertexId,
    /// Oppositely directed halfedge of the same edge.
    pub twin: HalfedgeId,
    /// Following halfedge on the boundary cycle.
    pub next: HalfedgeId,
    /// Preceding halfedge on the boundary cycle.
    pub prev: HalfedgeId,
    /// Face to the left.
    pub face: FaceId,
}
