//! A dense occupancy grid over a rectangular workspace.

use arbor_core::{Point, Range};
use arbor_plan::CollisionMap;

/// Boolean occupancy grid: every cell is either free or blocked.
///
/// Owns its buffer outright; the planner never shares map storage between
/// runs, so there is no need for slice views.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleGrid {
    bounds: Range,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Create an all-free grid of the given dimensions, origin (0, 0).
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            blocked: vec![false; bounds.len()],
            bounds,
        }
    }

    /// The workspace rectangle.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// Whether the cell is blocked. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_none_or(|i| self.blocked[i])
    }

    /// Block or free a single cell. Out-of-bounds points are ignored.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.idx(p) {
            self.blocked[i] = blocked;
        }
    }

    /// Block every cell in `rect` (clamped to the grid).
    pub fn fill_rect(&mut self, rect: Range) {
        self.paint_rect(rect, true);
    }

    /// Free every cell in `rect` (clamped to the grid).
    pub fn clear_rect(&mut self, rect: Range) {
        self.paint_rect(rect, false);
    }

    fn paint_rect(&mut self, rect: Range, blocked: bool) {
        let r = self.bounds.intersect(rect);
        for y in r.min.y..r.max.y {
            for x in r.min.x..r.max.x {
                self.set_blocked(Point::new(x, y), blocked);
            }
        }
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

impl CollisionMap for ObstacleGrid {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn is_free(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }
}
