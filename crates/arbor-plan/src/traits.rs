use arbor_core::{Point, Range};

/// Obstacle geometry boundary — the planner's only view of the workspace.
///
/// The planner never mutates the map; it only asks whether individual cells
/// are traversable. Points outside [`bounds`](CollisionMap::bounds) must
/// not be free.
pub trait CollisionMap {
    /// The workspace rectangle. Samples are drawn inside this.
    fn bounds(&self) -> Range;

    /// Whether `p` is inside the workspace and not in an obstacle.
    fn is_free(&self, p: Point) -> bool;
}

impl<M: CollisionMap + ?Sized> CollisionMap for &M {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn is_free(&self, p: Point) -> bool {
        (**self).is_free(p)
    }
}

/// Role of an edge emitted during result replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTag {
    /// An edge of the expanded tree.
    Tree,
    /// An edge along the returned solution path.
    Path,
    /// The terminal node of the solution path.
    Terminal,
}

/// Sink for rendering planner output, one `draw_edge` call per node.
///
/// The planner emits calls but never depends on what the sink does with
/// them; `()` implements this as a no-op.
pub trait DrawSink {
    /// Present the edge from `parent` to `child`. `parent` is `None` for
    /// the start node and for [`EdgeTag::Terminal`].
    fn draw_edge(&mut self, child: Point, parent: Option<Point>, tag: EdgeTag);
}

impl DrawSink for () {
    fn draw_edge(&mut self, _child: Point, _parent: Option<Point>, _tag: EdgeTag) {}
}
