//! Bresenham integer line traversal.

use crate::geom::Point;

/// Iterator over the grid cells of a straight segment, endpoints included.
///
/// Uses Bresenham's algorithm, so every yielded cell is adjacent
/// (8-connected) to the previous one. The planner rasterizes candidate
/// edges with this and collision-tests each cell.
#[derive(Debug, Clone)]
pub struct LineIter {
    cur: Point,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LineIter {
    /// Create an iterator over the cells from `a` to `b`, inclusive.
    pub fn new(a: Point, b: Point) -> Self {
        let dx = (b.x - a.x).abs();
        let dy = (b.y - a.y).abs();
        Self {
            cur: a,
            end: b,
            dx,
            dy,
            sx: if a.x > b.x { -1 } else { 1 },
            sy: if a.y > b.y { -1 } else { 1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LineIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.end {
            self.done = true;
            return Some(out);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(out)
    }
}
