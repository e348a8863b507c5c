//! Parent selection: connect a new sample to the cheapest safe neighbor.

use std::collections::BinaryHeap;

use arbor_core::{Point, euclidean};

use crate::collision::segment_is_free;
use crate::traits::CollisionMap;
use crate::tree::Tree;

/// Candidate parent ordered by ascending cost-to-come through it.
///
/// `Ord` is reversed so `BinaryHeap` (a max-heap) pops the cheapest first;
/// cost ties break on the lower arena index for determinism.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    cost: f64,
    idx: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the neighbor giving the lowest cost-to-come to `pos` whose
/// connecting segment is collision-free.
///
/// Candidates are drained in ascending cost order; the first with a clear
/// segment wins. Returns `None` when no neighbor can reach `pos`, in which
/// case the sample is not admitted this iteration.
pub(crate) fn best_parent<M: CollisionMap>(
    tree: &Tree,
    map: &M,
    pos: Point,
    neighbors: &[usize],
) -> Option<(usize, f64)> {
    let mut heap = BinaryHeap::with_capacity(neighbors.len());
    for &i in neighbors {
        let n = tree.node(i);
        heap.push(Candidate {
            cost: euclidean(pos, n.pos) + n.cost,
            idx: i,
        });
    }
    while let Some(c) = heap.pop() {
        if segment_is_free(map, tree.node(c.idx).pos, pos) {
            return Some((c.idx, c.cost));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::Range;
    use std::collections::HashSet;

    struct TestMap {
        bounds: Range,
        blocked: HashSet<Point>,
    }

    impl CollisionMap for TestMap {
        fn bounds(&self) -> Range {
            self.bounds
        }
        fn is_free(&self, p: Point) -> bool {
            self.bounds.contains(p) && !self.blocked.contains(&p)
        }
    }

    fn open_map() -> TestMap {
        TestMap {
            bounds: Range::new(0, 0, 40, 40),
            blocked: HashSet::new(),
        }
    }

    #[test]
    fn picks_lowest_cost_to_come_not_nearest() {
        let map = open_map();
        let mut tree = Tree::new(&map, Point::new(0, 0));
        // Near but expensive to reach.
        let near = tree.insert(Point::new(10, 0), 0, 50.0);
        // Farther from the sample but much cheaper.
        let far = tree.insert(Point::new(0, 8), 0, 8.0);
        let _ = near;
        let pos = Point::new(11, 2);
        let (parent, cost) = best_parent(&tree, &map, pos, &[1, 2]).unwrap();
        assert_eq!(parent, far);
        assert!((cost - (8.0 + euclidean(Point::new(0, 8), pos))).abs() < 1e-9);
    }

    #[test]
    fn skips_blocked_cheapest_candidate() {
        let mut map = open_map();
        let mut tree = Tree::new(&map, Point::new(0, 0));
        let cheap = tree.insert(Point::new(10, 10), 0, 1.0);
        let dear = tree.insert(Point::new(20, 0), 0, 30.0);
        // Wall between the cheap candidate and the sample.
        for y in 5..=15 {
            map.blocked.insert(Point::new(15, y));
        }
        let pos = Point::new(20, 10);
        let (parent, _) = best_parent(&tree, &map, pos, &[cheap, dear]).unwrap();
        assert_eq!(parent, dear);
    }

    #[test]
    fn no_reachable_neighbor_yields_none() {
        let mut map = open_map();
        let tree = Tree::new(&map, Point::new(0, 0));
        for i in 0..40 {
            map.blocked.insert(Point::new(5, i));
            map.blocked.insert(Point::new(i, 5));
        }
        assert_eq!(best_parent(&tree, &map, Point::new(20, 20), &[0]), None);
    }

    #[test]
    fn empty_neighborhood_yields_none() {
        let map = open_map();
        let tree = Tree::new(&map, Point::new(0, 0));
        assert_eq!(best_parent(&tree, &map, Point::new(20, 20), &[]), None);
    }

    #[test]
    fn cost_tie_breaks_on_lower_index() {
        let map = open_map();
        let mut tree = Tree::new(&map, Point::new(0, 0));
        // Symmetric candidates, identical cost-to-come through either.
        let a = tree.insert(Point::new(10, 8), 0, 4.0);
        let b = tree.insert(Point::new(10, 12), 0, 4.0);
        let _ = b;
        let (parent, _) = best_parent(&tree, &map, Point::new(10, 10), &[1, 2]).unwrap();
        assert_eq!(parent, a);
    }
}
