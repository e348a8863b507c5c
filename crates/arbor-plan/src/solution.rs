//! Best-solution bookkeeping.

use crate::tree::Tree;

/// Tracks every goal-reaching node recorded during a run.
///
/// Costs are re-read from the arena on every query: rewiring can
/// retroactively cheapen the ancestors of a recorded node, so the stored
/// slot is the durable fact and the cost is not. Recorded solutions are
/// never dropped; the best reported cost is therefore non-increasing over
/// a run.
#[derive(Debug, Default)]
pub(crate) struct SolutionTracker {
    solutions: Vec<usize>,
}

impl SolutionTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a goal-reaching node by arena index.
    pub(crate) fn record(&mut self, idx: usize) {
        if !self.solutions.contains(&idx) {
            self.solutions.push(idx);
        }
    }

    /// The cheapest recorded solution under *current* arena costs, if any.
    /// Ties keep the earliest-recorded node.
    pub(crate) fn best(&self, tree: &Tree) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for &idx in &self.solutions {
            let cost = tree.node(idx).cost;
            if best.is_none_or(|(_, c)| cost < c) {
                best = Some((idx, cost));
            }
        }
        best
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}
