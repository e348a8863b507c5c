use crate::geom::Point;

/// Euclidean (L2) distance between two points.
///
/// This is the metric for every path cost, neighborhood radius, and goal
/// test in the planner. Costs are real-valued; cell coordinates stay
/// integers.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    dx.hypot(dy)
}
