use arbor_core::Point;

use crate::error::ConfigError;
use crate::traits::CollisionMap;

/// Parameters for one planning run.
///
/// The iteration budget is an unsigned count, so "negative budget" is
/// unrepresentable; a budget of zero is legal and deterministically yields
/// `NotFound` after zero iterations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Root of the tree.
    pub start: Point,
    /// Center of the goal region.
    pub goal: Point,
    /// Radius of the goal region; a node strictly closer than this to the
    /// goal is a solution.
    pub goal_radius: f64,
    /// Radius of the neighborhood searched for parents and rewiring
    /// candidates (closed disk, Euclidean).
    pub neighbor_radius: f64,
    /// Number of samples to draw before giving up.
    pub iterations: usize,
    /// RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl PlannerConfig {
    pub const DEFAULT_GOAL_RADIUS: f64 = 10.0;
    pub const DEFAULT_NEIGHBOR_RADIUS: f64 = 20.0;
    pub const DEFAULT_ITERATIONS: usize = 7000;

    /// Config with the default radii and budget for the given endpoints.
    pub fn new(start: Point, goal: Point) -> Self {
        Self {
            start,
            goal,
            goal_radius: Self::DEFAULT_GOAL_RADIUS,
            neighbor_radius: Self::DEFAULT_NEIGHBOR_RADIUS,
            iterations: Self::DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    /// Check the configuration against a map before planning.
    ///
    /// Radii must be strictly positive and both endpoints must lie in free
    /// space. The first violation found is returned.
    pub fn validate<M: CollisionMap>(&self, map: &M) -> Result<(), ConfigError> {
        if !(self.goal_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                name: "goal_radius",
                value: self.goal_radius,
            });
        }
        if !(self.neighbor_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius {
                name: "neighbor_radius",
                value: self.neighbor_radius,
            });
        }
        if !map.is_free(self.start) {
            return Err(ConfigError::StartBlocked(self.start));
        }
        if !map.is_free(self.goal) {
            return Err(ConfigError::GoalBlocked(self.goal));
        }
        Ok(())
    }
}
