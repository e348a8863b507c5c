//! Error types for planner configuration and fatal invariant breaks.

use std::fmt;

use arbor_core::Point;

/// Rejected configuration — reported before any planning starts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The start cell is outside the workspace or inside an obstacle.
    StartBlocked(Point),
    /// The goal cell is outside the workspace or inside an obstacle.
    GoalBlocked(Point),
    /// A radius parameter was zero, negative, or NaN.
    NonPositiveRadius {
        name: &'static str,
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::StartBlocked(p) => write!(f, "start point {p} is not in free space"),
            ConfigError::GoalBlocked(p) => write!(f, "goal point {p} is not in free space"),
            ConfigError::NonPositiveRadius { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A broken tree invariant — indicates a bug in insertion or rewiring and
/// aborts the run rather than returning a wrong path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Backtracking from this node did not reach the start within
    /// tree-size steps.
    ParentCycle(Point),
    /// A parent reference pointed outside the node arena.
    DanglingParent(Point),
    /// A node carried a negative cost-to-come.
    NegativeCost(Point),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::ParentCycle(p) => {
                write!(f, "parent cycle detected while backtracking from {p}")
            }
            InvariantViolation::DanglingParent(p) => {
                write!(f, "dangling parent reference at {p}")
            }
            InvariantViolation::NegativeCost(p) => {
                write!(f, "negative cost-to-come at {p}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Any failure a planning run can surface.
///
/// Budget exhaustion without a solution is *not* an error; it is the
/// [`NotFound`](crate::PlanResult::NotFound) outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The configuration was rejected; no tree was built.
    Config(ConfigError),
    /// A fatal invariant break during the run.
    Invariant(InvariantViolation),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Config(e) => write!(f, "invalid configuration: {e}"),
            PlanError::Invariant(e) => write!(f, "planner invariant violated: {e}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Config(e) => Some(e),
            PlanError::Invariant(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PlanError {
    fn from(e: ConfigError) -> Self {
        PlanError::Config(e)
    }
}

impl From<InvariantViolation> for PlanError {
    fn from(e: InvariantViolation) -> Self {
        PlanError::Invariant(e)
    }
}
