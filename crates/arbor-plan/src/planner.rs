//! The planning loop: sample, validate, extend, rewire, track, extract.

use arbor_core::{Point, euclidean};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::PlannerConfig;
use crate::error::{InvariantViolation, PlanError};
use crate::extend::best_parent;
use crate::rewire::rewire;
use crate::sampler::Sampler;
use crate::solution::SolutionTracker;
use crate::traits::{CollisionMap, DrawSink, EdgeTag};
use crate::tree::Tree;

/// Terminal outcome of a planning run.
///
/// `NotFound` is a valid outcome, not an error: the budget ran out before
/// any node entered the goal region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanResult {
    /// A collision-free path from start to the goal region.
    Found {
        /// Ordered cells, start first, terminal node last.
        path: Vec<Point>,
        /// Cost-to-come of the terminal node.
        cost: f64,
    },
    /// No solution within the iteration budget.
    NotFound { iterations_run: usize },
}

impl PlanResult {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PlanResult::Found { .. })
    }
}

/// One expanded node captured for replay and inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEdge {
    pub pos: Point,
    /// Position of the node's parent; `None` for the start node.
    pub parent: Option<Point>,
    /// The node's cost-to-come at the end of the run.
    pub cost: f64,
}

/// Everything a run expanded, in insertion order, plus the solution path.
///
/// Feeds a [`DrawSink`] after planning and lets callers audit tree
/// invariants without access to the planner's internal arena.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    edges: Vec<TraceEdge>,
    path: Vec<Point>,
}

impl Trace {
    fn capture(tree: &Tree, outcome: &PlanResult) -> Self {
        let edges = tree
            .nodes()
            .iter()
            .map(|n| TraceEdge {
                pos: n.pos,
                parent: n.parent.map(|i| tree.node(i).pos),
                cost: n.cost,
            })
            .collect();
        let path = match outcome {
            PlanResult::Found { path, .. } => path.clone(),
            PlanResult::NotFound { .. } => Vec::new(),
        };
        Self { edges, path }
    }

    /// Expanded nodes in insertion order (the start node first).
    pub fn edges(&self) -> &[TraceEdge] {
        &self.edges
    }

    /// The solution path, empty when the run found none.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Emit the run to a sink: every expanded node once with
    /// [`EdgeTag::Tree`], then every path node with [`EdgeTag::Path`],
    /// then the terminal node with [`EdgeTag::Terminal`].
    pub fn replay<S: DrawSink>(&self, sink: &mut S) {
        for e in &self.edges {
            sink.draw_edge(e.pos, e.parent, EdgeTag::Tree);
        }
        let mut prev = None;
        for &p in &self.path {
            sink.draw_edge(p, prev, EdgeTag::Path);
            prev = Some(p);
        }
        if let Some(&last) = self.path.last() {
            sink.draw_edge(last, None, EdgeTag::Terminal);
        }
    }
}

/// Informed RRT* planner over a [`CollisionMap`].
///
/// One `Planner` value can run against several maps; each call to
/// [`plan`](Planner::plan) owns its tree, index, and solution record for
/// the duration of the run, so independent runs never share state.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Run the planner against `map`.
    pub fn plan<M: CollisionMap>(&self, map: &M) -> Result<PlanResult, PlanError> {
        self.plan_traced(map).map(|(outcome, _)| outcome)
    }

    /// Run the planner and also capture a [`Trace`] of every expansion.
    pub fn plan_traced<M: CollisionMap>(&self, map: &M) -> Result<(PlanResult, Trace), PlanError> {
        self.config.validate(map)?;
        let cfg = &self.config;
        let mut rng = match cfg.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let mut tree = Tree::new(map, cfg.start);
        let sampler = Sampler::new(map.bounds(), cfg.start, cfg.goal);
        let mut tracker = SolutionTracker::new();

        for iteration in 0..cfg.iterations {
            // The current best drives the sampling ellipse; rewiring may
            // have cheapened it since last iteration.
            let best_cost = tracker.best(&tree).map(|(_, c)| c);
            let pos = sampler.sample(&mut rng, best_cost);
            if tree.node_at(pos).is_some() || !tree.is_free(pos) {
                continue;
            }
            let neighbors = tree.neighbors_within(pos, cfg.neighbor_radius);
            let Some((parent, cost)) = best_parent(&tree, map, pos, &neighbors) else {
                // No neighbor can reach this sample; discard it.
                continue;
            };
            let new_idx = tree.insert(pos, parent, cost);
            rewire(&mut tree, map, new_idx, &neighbors);

            if euclidean(pos, cfg.goal) < cfg.goal_radius {
                let first = tracker.is_empty();
                tracker.record(new_idx);
                if first {
                    log::debug!("first solution at iteration {iteration}, cost {cost:.2}");
                } else if best_cost.is_some_and(|c| cost < c) {
                    log::debug!("improved solution at iteration {iteration}, cost {cost:.2}");
                }
            }
        }

        let outcome = match tracker.best(&tree) {
            Some((idx, cost)) => {
                let path = extract(&tree, idx)?;
                PlanResult::Found { path, cost }
            }
            None => PlanResult::NotFound {
                iterations_run: cfg.iterations,
            },
        };
        log::debug!(
            "run finished: {} nodes expanded over {} iterations",
            tree.len(),
            cfg.iterations
        );
        let trace = Trace::capture(&tree, &outcome);
        Ok((outcome, trace))
    }
}

/// Walk parent links from `terminal` back to the start and return the
/// path in start-to-goal order.
///
/// A walk longer than the tree, a parent index outside the arena, or a
/// negative cost is a broken invariant and aborts the run.
fn extract(tree: &Tree, terminal: usize) -> Result<Vec<Point>, InvariantViolation> {
    let mut path = Vec::new();
    let mut cur = tree.node(terminal);
    let mut steps = 0usize;
    loop {
        if cur.cost < 0.0 {
            return Err(InvariantViolation::NegativeCost(cur.pos));
        }
        path.push(cur.pos);
        let Some(pi) = cur.parent else { break };
        steps += 1;
        if steps > tree.len() {
            return Err(InvariantViolation::ParentCycle(cur.pos));
        }
        cur = tree
            .get(pi)
            .ok_or(InvariantViolation::DanglingParent(cur.pos))?;
    }
    path.reverse();
    Ok(path)
}
