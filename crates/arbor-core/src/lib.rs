//! **arbor-core** — Geometry primitives for sampling-based 2D path planning.
//!
//! This crate provides the foundational types used across the *arbor*
//! ecosystem: integer grid points and rectangles, the Euclidean metric used
//! for all path costs, and Bresenham line traversal for segment
//! rasterization.

pub mod distance;
pub mod geom;
pub mod line;

pub use distance::euclidean;
pub use geom::{Point, Range};
pub use line::LineIter;
