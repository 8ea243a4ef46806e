use crate::math::ExactPoint;

slotmap::new_key_type! {
    /// Unique identifier for a vertex of an arrangement.
    pub struct VertexId;
}

/// Data associated with an arrangement vertex.
///
/// Vertices are polygon vertices and exact intersection points; no two
/// vertices share a location.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Exact location of the vertex.
    pub point: ExactPoint,
}
