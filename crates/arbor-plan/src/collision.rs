use arbor_core::{LineIter, Point};

use crate::traits::CollisionMap;

/// Whether the straight segment from `a` to `b` stays in free space.
///
/// The segment is rasterized with Bresenham traversal and every traversed
/// cell (endpoints included) is tested against the map. Rasterization is
/// the planner's own collision-checking semantics, not the map's.
pub fn segment_is_free<M: CollisionMap>(map: &M, a: Point, b: Point) -> bool {
    LineIter::new(a, b).all(|p| map.is_free(p))
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

    impl TestMap {
        fn open(w: i32, h: i32) -> Self {
            Self {
                bounds: Range::new(0, 0, w, h),
                blocked: HashSet::new(),
            }
        }
    }

    impl CollisionMap for TestMap {
        fn bounds(&self) -> Range {
            self.bounds
        }
        fn is_free(&self, p: Point) -> bool {
            self.bounds.contains(p) && !self.blocked.contains(&p)
        }
    }

    #[test]
    fn open_segment_is_free() {
        let map = TestMap::open(20, 20);
        assert!(segment_is_free(&map, Point::new(0, 0), Point::new(19, 19)));
    }

    #[test]
    fn blocked_interior_cell_fails() {
        let mut map = TestMap::open(20, 20);
        map.blocked.insert(Point::new(5, 5));
        assert!(!segment_is_free(&map, Point::new(0, 0), Point::new(10, 10)));
        // A segment that misses the blocked cell still passes.
        assert!(segment_is_free(&map, Point::new(0, 10), Point::new(10, 10)));
    }

    #[test]
    fn blocked_endpoint_fails() {
        let mut map = TestMap::open(20, 20);
        map.blocked.insert(Point::new(3, 0));
        assert!(!segment_is_free(&map, Point::new(0, 0), Point::new(3, 0)));
        assert!(!segment_is_free(&map, Point::new(3, 0), Point::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_segment_fails() {
        let map = TestMap::open(10, 10);
        assert!(!segment_is_free(&map, Point::new(5, 5), Point::new(12, 5)));
    }
}
