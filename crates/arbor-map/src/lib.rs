//! Obstacle-grid workspace models for the *arbor* planner.
//!
//! Provides [`ObstacleGrid`], a dense boolean occupancy grid implementing
//! the planner's [`CollisionMap`](arbor_plan::CollisionMap) boundary, and
//! [`MapGen`], a procedural generator that scatters random rectangular
//! obstacles over a grid.

pub mod grid;
pub mod mapgen;

pub use grid::ObstacleGrid;
pub use mapgen::MapGen;
