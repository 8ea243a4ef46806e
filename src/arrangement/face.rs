use super::halfedge::HalfedgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face of an arrangement.
    pub struct FaceId;
}

/// Data associated with an arrangement face.
#[derive(Debug, Clone, Default)]
pub struct FaceData {
    /// A halfedge on the outer boundary; `None` for the unbounded face.
    pub outer_ccb: Option<HalfedgeId>,
    /// One halfedge per inner boundary cycle, ordered by the cycle's
    /// lexicographically smallest vertex.
    pub holes: Vec<HalfedgeId>,
}

impl FaceData {
    /// Returns `true` for the face extending to infinity.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.outer_ccb.is_none()
    }
}
