//! Neighborhood rewiring after an insertion.

use arbor_core::euclidean;

use crate::collision::segment_is_free;
use crate::traits::CollisionMap;
use crate::tree::Tree;

/// Reparent every neighbor that the freshly inserted node can reach more
/// cheaply than its current parent does, provided the connecting segment
/// is collision-free. The chosen parent itself is skipped.
///
/// Rewiring is shallow: only the neighbor's own cost is updated, not its
/// descendants'. Recorded solutions compensate by re-reading current
/// costs when queried.
///
/// Returns the number of neighbors rewired.
pub(crate) fn rewire<M: CollisionMap>(
    tree: &mut Tree,
    map: &M,
    new_idx: usize,
    neighbors: &[usize],
) -> usize {
    let new_pos = tree.node(new_idx).pos;
    let new_cost = tree.node(new_idx).cost;
    let parent = tree.node(new_idx).parent;
    let mut rewired = 0;
    for &i in neighbors {
        if Some(i) == parent {
            continue;
        }
        let n = tree.node(i);
        let candidate = euclidean(new_pos, n.pos) + new_cost;
        if candidate < n.cost && segment_is_free(map, new_pos, n.pos) {
            tree.reparent(i, new_idx, candidate);
            rewired += 1;
        }
    }
    rewired
}
