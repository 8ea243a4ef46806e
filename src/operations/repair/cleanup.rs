//! Post-processing of the outer boundary walk.
//!
//! The walk around the unbounded face's hole follows every edge that touches
//! the outside. It runs out and back along dangling edges, and it passes
//! through a vertex more than once where two lobes touch.

use std::collections::BTreeMap;

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::{GeometryError, Result};
use crate::math::exact::{
    doubled_area, intersect_segments, on_segment, strictly_inside, SegmentIntersection,
};
use crate::math::ExactPoint;

/// Removes `u -> v -> u` excursions, dropping `v` and one `u`, until none
/// are left.
///
/// The walk around a tree collapses to two vertices.
pub(super) fn cancel_backtracks(walk: &mut Vec<&ExactPoint>) {
    while walk.len() >= 3 {
        let n = walk.len();
        let Some(i) = (0..n).find(|&i| walk[(i + n - 1) % n] == walk[(i + 1) % n]) else {
            return;
        };
        let j = (i + 1) % n;
        walk.remove(i.max(j));
        walk.remove(i.min(j));
    }
}

/// Cuts the walk open at vertices it visits more than once.
///
/// For each pinch vertex, dropping all of its visits is tried first, then
/// each visit on its own. A cut is taken only if the boundary keeps running
/// clockwise, its edges meet at most at shared vertices, and it still
/// encloses every vertex of the walk.
///
/// # Errors
///
/// Returns `GeometryError::UnresolvedPinch` if a pinch vertex admits no cut.
pub(super) fn resolve_pinches<'a>(mut walk: Vec<&'a ExactPoint>) -> Result<Vec<&'a ExactPoint>> {
    let original = walk.clone();
    loop {
        let mut visits: BTreeMap<&'a ExactPoint, Vec<usize>> = BTreeMap::new();
        for (i, &p) in walk.iter().enumerate() {
            visits.entry(p).or_default().push(i);
        }
        let pinches: Vec<(&'a ExactPoint, Vec<usize>)> =
            visits.into_iter().filter(|(_, at)| at.len() > 1).collect();
        let Some((stuck, _)) = pinches.first() else {
            return Ok(walk);
        };

        let mut cut = None;
        'search: for (p, at) in &pinches {
            let without_all: Vec<&ExactPoint> =
                walk.iter().copied().filter(|&q| q != *p).collect();
            if is_valid_cut(&without_all, &original) {
                cut = Some(without_all);
                break;
            }
            for &i in at {
                let mut without_one = walk.clone();
                without_one.remove(i);
                if is_valid_cut(&without_one, &original) {
                    cut = Some(without_one);
                    break 'search;
                }
            }
        }

        match cut {
            Some(next) => walk = next,
            None => {
                let at = format!("({}, {})", stuck.x, stuck.y);
                return Err(GeometryError::UnresolvedPinch(at).into());
            }
        }
    }
}

fn is_valid_cut(cycle: &[&ExactPoint], walk: &[&ExactPoint]) -> bool {
    cycle.len() >= 3
        && doubled_area(cycle) < BigRational::zero()
        && edges_only_touch(cycle)
        && walk.iter().all(|p| encloses(cycle, p))
}

/// Edges may share endpoints but must not cross, overlap, or touch another
/// edge's interior.
fn edges_only_touch(cycle: &[&ExactPoint]) -> bool {
    let n = cycle.len();
    let edge = |i: usize| (cycle[i], cycle[(i + 1) % n]);
    if (0..n).any(|i| edge(i).0 == edge(i).1) {
        return false;
    }
    for i in 0..n {
        let (a0, a1) = edge(i);
        for j in (i + 1)..n {
            let (b0, b1) = edge(j);
            let touch_only = match intersect_segments(a0, a1, b0, b1) {
                SegmentIntersection::None => true,
                SegmentIntersection::Point(q) => {
                    (q == *a0 || q == *a1) && (q == *b0 || q == *b1)
                }
                SegmentIntersection::Overlap(..) => false,
            };
            if !touch_only {
                return false;
            }
        }
    }
    true
}

fn encloses(cycle: &[&ExactPoint], p: &ExactPoint) -> bool {
    let n = cycle.len();
    (0..n).any(|i| on_segment(p, cycle[i], cycle[(i + 1) % n])) || strictly_inside(p, cycle)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn ep(x: f64, y: f64) -> ExactPoint {
        ExactPoint::from_point2(&Point2::new(x, y)).unwrap()
    }

    #[test]
    fn spur_is_cancelled() {
        let pts = [
            ep(0.0, 1.0),
            ep(1.0, 1.0),
            ep(1.0, 0.5),
            ep(2.0, 0.5),
            ep(1.0, 0.0),
            ep(0.0, 0.0),
        ];
        let [p0, p1, base, tip, p4, p5] = &pts;
        let mut walk = vec![p0, p1, base, tip, base, p4, p5];
        cancel_backtracks(&mut walk);
        assert_eq!(walk, vec![p0, p1, base, p4, p5]);
    }

    #[test]
    fn spur_across_the_start_is_cancelled() {
        let pts = [ep(0.0, 0.0), ep(-1.0, 0.0), ep(0.0, 1.0), ep(1.0, 1.0)];
        let [base, tip, a, b] = &pts;
        // Cyclically: base -> a -> b -> base -> tip -> base.
        let mut walk = vec![tip, base, a, b, base];
        cancel_backtracks(&mut walk);
        assert_eq!(walk.len(), 3);
        assert!(!walk.contains(&tip));
    }

    #[test]
    fn tree_walk_collapses() {
        let pts = [ep(0.0, 0.0), ep(1.0, 0.0), ep(2.0, 0.0)];
        let [a, b, c] = &pts;
        let mut walk = vec![b, c, b, a];
        cancel_backtracks(&mut walk);
        assert_eq!(walk.len(), 2);
    }

    #[test]
    fn bowtie_pinch_is_cut_at_both_visits() {
        let pts = [ep(0.0, 1.0), ep(0.5, 0.5), ep(1.0, 1.0), ep(1.0, 0.0), ep(0.0, 0.0)];
        let [tl, c, tr, br, bl] = &pts;
        let walk = vec![tl, c, tr, br, c, bl];
        let out = resolve_pinches(walk).unwrap();
        assert_eq!(out, vec![tl, tr, br, bl]);
    }

    #[test]
    fn lobes_sharing_a_vertex_keep_one_visit() {
        let pts = [ep(0.0, 0.0), ep(10.0, 0.0), ep(10.0, 1.0), ep(10.0, 3.0), ep(10.0, 4.0)];
        let [a, b, c, d, e] = &pts;
        let walk = vec![e, d, a, c, b, a];
        let out = resolve_pinches(walk).unwrap();
        assert_eq!(out, vec![e, d, c, b, a]);
    }

    #[test]
    fn counterclockwise_walk_has_no_valid_cut() {
        let pts = [ep(0.0, 0.0), ep(0.5, 0.5), ep(1.0, 0.0), ep(1.0, 1.0), ep(0.0, 1.0)];
        let [bl, c, br, tr, tl] = &pts;
        let walk = vec![bl, c, br, tr, c, tl];
        let err = resolve_pinches(walk).unwrap_err();
        assert!(matches!(
            err,
            crate::PolygeomError::Geometry(GeometryError::UnresolvedPinch(_))
        ));
    }

    #[test]
    fn simple_walk_is_untouched() {
        let pts = [ep(0.0, 1.0), ep(1.0, 1.0), ep(1.0, 0.0), ep(0.0, 0.0)];
        let walk: Vec<&ExactPoint> = pts.iter().collect();
        assert_eq!(resolve_pinches(walk.clone()).unwrap(), walk);
    }
}
