use super::{Arrangement, HalfedgeId};

/// Iterator over a connected component of a face boundary.
///
/// Yields `start` first, then follows `next` links and stops as soon as it
/// would return to `start`. The cycle length is only known once the walk is
/// complete. A broken link ends the iteration early.
pub struct CcbCirculator<'a> {
    arrangement: &'a Arrangement,
    start: HalfedgeId,
    current: Option<HalfedgeId>,
}

impl<'a> CcbCirculator<'a> {
    pub(super) fn new(arrangement: &'a Arrangement, start: HalfedgeId) -> Self {
        Self {
            arrangement,
            start,
            current: Some(start),
        }
    }
}

impl Iterator for CcbCirculator<'_> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        let current = self.current?;
        self.current = self
            .arrangement
            .halfedges
            .get(current)
            .map(|h| h.next)
            .filter(|&next| next != self.start);
        Some(current)
    }
}
