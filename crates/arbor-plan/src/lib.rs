//! Informed RRT* planning for 2D grid workspaces.
//!
//! This crate implements an anytime sampling-based planner: it grows a tree
//! of collision-free configurations from a start cell, connects each new
//! sample to the cheapest safe parent in its neighborhood, rewires
//! neighbors that the new node can reach more cheaply, and — once a first
//! solution exists — restricts further sampling to the ellipse that can
//! still contain a cheaper path (informed sampling).
//!
//! The workspace itself is an external collaborator: anything implementing
//! [`CollisionMap`] (bounds plus a point-in-free-space test) can be planned
//! over. Segment validity is the planner's own concern and is computed by
//! Bresenham rasterization over the map.
//!
//! # Entry point
//!
//! ```no_run
//! use arbor_core::{Point, Range};
//! use arbor_plan::{CollisionMap, Planner, PlannerConfig};
//!
//! struct Open;
//! impl CollisionMap for Open {
//!     fn bounds(&self) -> Range {
//!         Range::new(0, 0, 60, 60)
//!     }
//!     fn is_free(&self, p: Point) -> bool {
//!         self.bounds().contains(p)
//!     }
//! }
//!
//! let config = PlannerConfig::new(Point::new(0, 0), Point::new(50, 50));
//! let result = Planner::new(config).plan(&Open)?;
//! # Ok::<(), arbor_plan::PlanError>(())
//! ```

mod collision;
mod config;
mod error;
mod extend;
mod planner;
mod rewire;
mod sampler;
mod solution;
mod traits;
mod tree;

pub use collision::segment_is_free;
pub use config::PlannerConfig;
pub use error::{ConfigError, InvariantViolation, PlanError};
pub use planner::{PlanResult, Planner, Trace, TraceEdge};
pub use sampler::Sampler;
pub use traits::{CollisionMap, DrawSink, EdgeTag};
