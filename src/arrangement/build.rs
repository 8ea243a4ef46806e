use std::collections::{BTreeMap, BTreeSet};

use num_rational::BigRational;
use num_traits::Zero;
use slotmap::SecondaryMap;

use super::{Arrangement, FaceData, FaceId, HalfedgeData, HalfedgeId, VertexData, VertexId};
use crate::error::{Result, TopologyError};
use crate::math::exact::{
    compare_angle, doubled_area, intersect_segments, strictly_inside, SegmentIntersection,
};
use crate::math::ExactPoint;

/// A traced boundary cycle before it is attached to a face.
struct Cycle {
    /// Halfedge leaving the smallest vertex of the cycle.
    start: HalfedgeId,
    halfedges: Vec<HalfedgeId>,
    points: Vec<ExactPoint>,
    smallest: ExactPoint,
    doubled_area: BigRational,
}

impl Arrangement {
    /// Builds the arrangement induced by a set of possibly crossing segments.
    ///
    /// Segments are split at every exact intersection point, overlapping
    /// pieces are merged, and zero-length segments are ignored.
    ///
    /// # Errors
    ///
    /// Returns a `TopologyError` if a boundary cycle cannot be traced, which
    /// indicates an internal inconsistency.
    pub fn from_segments(segments: &[(ExactPoint, ExactPoint)]) -> Result<Self> {
        let segments: Vec<&(ExactPoint, ExactPoint)> =
            segments.iter().filter(|(a, b)| a != b).collect();

        let mut arrangement = Self::empty();
        let edges = arrangement.split_segments(&segments);
        arrangement.insert_edges(&edges);
        arrangement.link_around_vertices()?;
        arrangement.assign_faces()?;

        tracing::debug!(
            segments = segments.len(),
            vertices = arrangement.vertex_count(),
            edges = arrangement.edge_count(),
            faces = arrangement.face_count(),
            "arrangement built"
        );
        Ok(arrangement)
    }

    /// Splits every segment at all points lying on it and returns the set of
    /// distinct undirected edges between consecutive points.
    fn split_segments(
        &mut self,
        segments: &[&(ExactPoint, ExactPoint)],
    ) -> BTreeSet<(VertexId, VertexId)> {
        let mut on_segment: Vec<Vec<ExactPoint>> = segments
            .iter()
            .map(|(a, b)| vec![a.clone(), b.clone()])
            .collect();

        for i in 0..segments.len() {
            for j in (i + 1)..segments.len() {
                let (a0, a1) = segments[i];
                let (b0, b1) = segments[j];
                match intersect_segments(a0, a1, b0, b1) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        on_segment[i].push(p.clone());
                        on_segment[j].push(p);
                    }
                    SegmentIntersection::Overlap(p, q) => {
                        on_segment[i].extend([p.clone(), q.clone()]);
                        on_segment[j].extend([p, q]);
                    }
                }
            }
        }

        let mut located: BTreeMap<ExactPoint, VertexId> = BTreeMap::new();
        let mut edges = BTreeSet::new();
        for mut points in on_segment {
            // Points on one segment are collinear, so lexicographic order is
            // order along the segment.
            points.sort();
            points.dedup();
            let ids: Vec<VertexId> = points
                .into_iter()
                .map(|p| self.locate_or_insert(&mut located, p))
                .collect();
            for pair in ids.windows(2) {
                let (u, v) = (pair[0], pair[1]);
                edges.insert((u.min(v), u.max(v)));
            }
        }
        edges
    }

    fn locate_or_insert(
        &mut self,
        located: &mut BTreeMap<ExactPoint, VertexId>,
        point: ExactPoint,
    ) -> VertexId {
        if let Some(&id) = located.get(&point) {
            return id;
        }
        let id = self.vertices.insert(VertexData {
            point: point.clone(),
        });
        located.insert(point, id);
        id
    }

    /// Creates a pair of twin halfedges per edge. `next`/`prev` stay unset.
    fn insert_edges(&mut self, edges: &BTreeSet<(VertexId, VertexId)>) {
        let face = self.unbounded_face;
        for &(u, v) in edges {
            let unlinked = |origin| HalfedgeData {
                origin,
                twin: HalfedgeId::default(),
                next: HalfedgeId::default(),
                prev: HalfedgeId::default(),
                face,
            };
            let forward = self.halfedges.insert(unlinked(u));
            let backward = self.halfedges.insert(unlinked(v));
            self.halfedges[forward].twin = backward;
            self.halfedges[backward].twin = forward;
        }
    }

    /// Sorts the outgoing halfedges of every vertex counter-clockwise and
    /// links each incoming halfedge to the next outgoing one clockwise, which
    /// keeps the incident face on the left.
    fn link_around_vertices(&mut self) -> Result<()> {
        let mut outgoing: SecondaryMap<VertexId, Vec<(HalfedgeId, BigRational, BigRational)>> =
            SecondaryMap::new();
        for (id, half) in &self.halfedges {
            let from = self.source(id)?;
            let to = self.target(id)?;
            let (dx, dy) = (&to.x - &from.x, &to.y - &from.y);
            if let Some(entry) = outgoing.entry(half.origin) {
                entry.or_default().push((id, dx, dy));
            }
        }

        for (_, fan) in &mut outgoing {
            fan.sort_by(|(_, ax, ay), (_, bx, by)| compare_angle((ax, ay), (bx, by)));
            let k = fan.len();
            for i in 0..k {
                let leaving = fan[i].0;
                let clockwise_next = fan[(i + k - 1) % k].0;
                let arriving = self.halfedges[leaving].twin;
                self.halfedges[arriving].next = clockwise_next;
                self.halfedges[clockwise_next].prev = arriving;
            }
        }
        Ok(())
    }

    /// Traces every boundary cycle, creates one bounded face per
    /// counter-clockwise cycle and attaches the remaining cycles as holes of
    /// the innermost face containing them.
    fn assign_faces(&mut self) -> Result<()> {
        let cycles = self.trace_cycles()?;
        let (outer, inner): (Vec<Cycle>, Vec<Cycle>) = cycles
            .into_iter()
            .partition(|c| c.doubled_area > BigRational::zero());

        let mut bounded: Vec<(FaceId, Cycle)> = Vec::with_capacity(outer.len());
        for cycle in outer {
            let face = self.faces.insert(FaceData {
                outer_ccb: Some(cycle.start),
                holes: Vec::new(),
            });
            for &h in &cycle.halfedges {
                self.halfedges[h].face = face;
            }
            bounded.push((face, cycle));
        }

        let mut holes: BTreeMap<FaceId, Vec<(ExactPoint, HalfedgeId)>> = BTreeMap::new();
        for cycle in inner {
            let face = bounded
                .iter()
                .filter(|(_, b)| {
                    // A cycle through the point belongs to the same component.
                    if b.points.contains(&cycle.smallest) {
                        return false;
                    }
                    let ring: Vec<&ExactPoint> = b.points.iter().collect();
                    strictly_inside(&cycle.smallest, &ring)
                })
                .min_by(|(_, a), (_, b)| a.doubled_area.cmp(&b.doubled_area))
                .map_or(self.unbounded_face, |(face, _)| *face);
            for &h in &cycle.halfedges {
                self.halfedges[h].face = face;
            }
            holes
                .entry(face)
                .or_default()
                .push((cycle.smallest, cycle.start));
        }

        for (face, mut list) in holes {
            list.sort_by(|a, b| a.0.cmp(&b.0));
            self.faces[face].holes = list.into_iter().map(|(_, h)| h).collect();
        }
        Ok(())
    }

    fn trace_cycles(&self) -> Result<Vec<Cycle>> {
        let mut visited: SecondaryMap<HalfedgeId, ()> = SecondaryMap::new();
        let mut cycles = Vec::new();
        for id in self.halfedges.keys() {
            if visited.contains_key(id) {
                continue;
            }
            let halfedges = self.ccb_halfedges(id)?;
            let mut points = Vec::with_capacity(halfedges.len());
            for &h in &halfedges {
                visited.insert(h, ());
                points.push(self.source(h)?.clone());
            }
            let start = self.lowest_start(&halfedges)?;
            let smallest = self.source(start)?.clone();
            let ring: Vec<&ExactPoint> = points.iter().collect();
            let doubled_area = doubled_area(&ring);
            cycles.push(Cycle {
                start,
                halfedges,
                points,
                smallest,
                doubled_area,
            });
        }
        Ok(cycles)
    }

    /// Picks the halfedge leaving the cycle's lexicographically smallest
    /// vertex; ties at a repeated vertex go to the smallest direction angle.
    fn lowest_start(&self, halfedges: &[HalfedgeId]) -> Result<HalfedgeId> {
        let mut keyed = Vec::with_capacity(halfedges.len());
        for &h in halfedges {
            let from = self.source(h)?;
            let to = self.target(h)?;
            keyed.push((h, from, (&to.x - &from.x, &to.y - &from.y)));
        }
        keyed
            .into_iter()
            .min_by(|(_, pa, (ax, ay)), (_, pb, (bx, by))| {
                pa.cmp(pb)
                    .then_with(|| compare_angle((ax, ay), (bx, by)))
            })
            .map(|(h, _, _)| h)
            .ok_or_else(|| TopologyError::EntityNotFound("halfedge").into())
    }
}
