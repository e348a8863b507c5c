//! The node arena and its dense grid index.
//!
//! Nodes live in an insertion-ordered arena; parent links are arena
//! indices, never owning pointers, so the parent relation can only point
//! at already-expanded nodes and is acyclic by construction. A flat
//! point-to-slot grid doubles as the "best node at this cell" index, and a
//! free-space mask caches the map's verdict for every cell once at
//! construction.

use arbor_core::{Point, Range, euclidean};

use crate::traits::CollisionMap;

/// One admitted sample.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    /// Accumulated path length from the start; 0 for the start node.
    pub(crate) cost: f64,
    /// Arena index of the parent; `None` only for the start node.
    pub(crate) parent: Option<usize>,
}

pub(crate) struct Tree {
    bounds: Range,
    width: usize,
    nodes: Vec<Node>,
    /// Dense cell → arena-slot index. Doubles as the run-local visited
    /// set: a cell is occupied exactly when a node was admitted there.
    slot: Vec<Option<usize>>,
    /// Cached per-cell free-space verdict, set once at construction.
    free: Vec<bool>,
}

impl Tree {
    /// Build the index over the map's bounds and root the tree at `start`.
    ///
    /// `start` must be free; the config validation guarantees this.
    pub(crate) fn new<M: CollisionMap>(map: &M, start: Point) -> Self {
        let bounds = map.bounds();
        let width = bounds.width().max(0) as usize;
        let len = bounds.len();
        let mut free = vec![false; len];
        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                let p = Point::new(x, y);
                let i = (y - bounds.min.y) as usize * width + (x - bounds.min.x) as usize;
                free[i] = map.is_free(p);
            }
        }
        let mut tree = Self {
            bounds,
            width,
            nodes: Vec::new(),
            slot: vec![None; len],
            free,
        };
        let root = Node {
            pos: start,
            cost: 0.0,
            parent: None,
        };
        tree.nodes.push(root);
        if let Some(i) = tree.idx(start) {
            tree.slot[i] = Some(0);
        }
        tree
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Whether `p` is inside the workspace and its cached verdict is free.
    #[inline]
    pub(crate) fn is_free(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.free[i])
    }

    /// The node admitted at `p`, if any. Positions are unique, so this is
    /// also the visited check before insertion.
    #[inline]
    pub(crate) fn node_at(&self, p: Point) -> Option<&Node> {
        self.idx(p)
            .and_then(|i| self.slot[i])
            .map(|n| &self.nodes[n])
    }

    /// Admit a new node. The caller has already checked that `pos` is
    /// free, unvisited, and that the segment to its parent is clear.
    pub(crate) fn insert(&mut self, pos: Point, parent: usize, cost: f64) -> usize {
        debug_assert!(self.is_free(pos));
        debug_assert!(self.node_at(pos).is_none());
        debug_assert!(cost >= 0.0);
        let new_idx = self.nodes.len();
        self.nodes.push(Node {
            pos,
            cost,
            parent: Some(parent),
        });
        if let Some(i) = self.idx(pos) {
            self.slot[i] = Some(new_idx);
        }
        new_idx
    }

    /// Redirect node `i` to a cheaper parent. Updates the single arena
    /// record, which the grid index aliases by slot.
    pub(crate) fn reparent(&mut self, i: usize, parent: usize, cost: f64) {
        debug_assert!(cost >= 0.0);
        self.nodes[i].parent = Some(parent);
        self.nodes[i].cost = cost;
    }

    /// Indices of all expanded nodes within `radius` of `pos` (closed
    /// disk, Euclidean metric, `pos` itself excluded).
    ///
    /// Brute-force scan of the arena; O(tree size) per call.
    pub(crate) fn neighbors_within(&self, pos: Point, radius: f64) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.pos != pos && euclidean(n.pos, pos) <= radius)
            .map(|(i, _)| i)
            .collect()
    }

    #[inline]
    pub(crate) fn node(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<&Node> {
        self.nodes.get(i)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Open(Range);

    impl CollisionMap for Open {
        fn bounds(&self) -> Range {
            self.0
        }
        fn is_free(&self, p: Point) -> bool {
            self.0.contains(p)
        }
    }

    fn open_tree() -> Tree {
        Tree::new(&Open(Range::new(0, 0, 30, 30)), Point::new(0, 0))
    }

    #[test]
    fn root_is_start_at_zero_cost() {
        let tree = open_tree();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(0).pos, Point::new(0, 0));
        assert_eq!(tree.node(0).cost, 0.0);
        assert_eq!(tree.node(0).parent, None);
        assert!(tree.node_at(Point::new(0, 0)).is_some());
    }

    #[test]
    fn insert_links_parent_and_occupies_the_cell() {
        let mut tree = open_tree();
        let p = Point::new(3, 4);
        let i = tree.insert(p, 0, 5.0);
        assert_eq!(i, 1);
        assert_eq!(tree.node(i).parent, Some(0));
        assert!(tree.node_at(p).is_some());
        assert_eq!(tree.node_at(p).unwrap().cost, 5.0);
        assert!(tree.node_at(Point::new(4, 4)).is_none());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn reparent_updates_cost_and_link() {
        let mut tree = open_tree();
        let a = tree.insert(Point::new(10, 0), 0, 10.0);
        let b = tree.insert(Point::new(10, 2), a, 12.0);
        tree.reparent(b, 0, 10.2);
        assert_eq!(tree.node(b).parent, Some(0));
        assert_eq!(tree.node(b).cost, 10.2);
    }

    #[test]
    fn neighbors_within_is_closed_disk_excluding_self() {
        let mut tree = open_tree();
        tree.insert(Point::new(5, 0), 0, 5.0); // exactly on the boundary
        tree.insert(Point::new(6, 0), 0, 6.0); // just outside
        tree.insert(Point::new(1, 1), 0, 1.5);
        let found = tree.neighbors_within(Point::new(0, 0), 5.0);
        // Start excluded (same position), boundary node included.
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn out_of_bounds_is_neither_free_nor_visited() {
        let tree = open_tree();
        assert!(!tree.is_free(Point::new(-1, 0)));
        assert!(!tree.is_free(Point::new(30, 30)));
        assert!(tree.node_at(Point::new(-1, 0)).is_none());
    }

    #[test]
    fn free_mask_caches_obstacles() {
        struct Wall(Range);
        impl CollisionMap for Wall {
            fn bounds(&self) -> Range {
                self.0
            }
            fn is_free(&self, p: Point) -> bool {
                self.0.contains(p) && p.x != 4
            }
        }
        let tree = Tree::new(&Wall(Range::new(0, 0, 10, 10)), Point::new(0, 0));
        assert!(!tree.is_free(Point::new(4, 7)));
        assert!(tree.is_free(Point::new(5, 7)));
    }
}
