//! Procedural obstacle layout.

use arbor_core::{Point, Range};
use rand::Rng;

use crate::grid::ObstacleGrid;

/// Obstacle-map generator operating on an [`ObstacleGrid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: ObstacleGrid,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator over the given grid.
    pub fn with_grid(grid: ObstacleGrid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Scatter `count` random axis-aligned rectangular obstacles.
    ///
    /// Each rectangle gets a uniformly random origin inside the grid and
    /// side lengths in `min_side..=max_side`; parts falling outside the
    /// grid are clipped. Rectangles may overlap.
    pub fn scatter_rects(&mut self, count: usize, min_side: i32, max_side: i32) {
        let bounds = self.grid.bounds();
        for _ in 0..count {
            let x = self.rng.random_range(bounds.min.x..bounds.max.x);
            let y = self.rng.random_range(bounds.min.y..bounds.max.y);
            let w = self.rng.random_range(min_side..=max_side);
            let h = self.rng.random_range(min_side..=max_side);
            self.grid.fill_rect(Range::new(x, y, x + w, y + h));
        }
    }

    /// Re-open the given cells so planning endpoints stay in free space
    /// regardless of where obstacles landed.
    pub fn keep_clear(&mut self, points: &[Point]) {
        for &p in points {
            self.grid.set_blocked(p, false);
        }
    }

    /// Finish generation and take the grid.
    pub fn into_grid(self) -> ObstacleGrid {
        self.grid
    }
}
