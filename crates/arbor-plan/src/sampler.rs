//! Candidate-point generation: uniform until a solution exists, then
//! informed (ellipsoidal).

use std::f64::consts::TAU;

use arbor_core::{Point, Range, euclidean};
use rand::Rng;

/// Draws candidate configuration points for the planning loop.
///
/// While no solution is known, points are uniform over the workspace.
/// Once a best cost `c_max` exists, any path cheaper than `c_max` must lie
/// inside the ellipse with foci at start and goal whose major axis is
/// `c_max`, so sampling is restricted to that ellipse. As the best cost
/// shrinks toward the straight-line distance, the ellipse collapses onto
/// the start–goal line.
#[derive(Debug, Clone)]
pub struct Sampler {
    bounds: Range,
    start: Point,
    goal: Point,
    /// Straight-line distance between the foci; the minimum possible cost.
    c_min: f64,
}

impl Sampler {
    pub fn new(bounds: Range, start: Point, goal: Point) -> Self {
        Self {
            bounds,
            start,
            goal,
            c_min: euclidean(start, goal),
        }
    }

    /// Draw one candidate point.
    ///
    /// `best_cost` is the cost of the best solution known so far, if any.
    /// Informed samples may land outside the workspace bounds (the ellipse
    /// can overhang the map edge); callers reject those through the usual
    /// validity check.
    pub fn sample<R: Rng>(&self, rng: &mut R, best_cost: Option<f64>) -> Point {
        match best_cost {
            Some(c_max) => self.informed(rng, c_max),
            None => self.uniform(rng),
        }
    }

    fn uniform<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(self.bounds.min.x..self.bounds.max.x),
            rng.random_range(self.bounds.min.y..self.bounds.max.y),
        )
    }

    fn informed<R: Rng>(&self, rng: &mut R, c_max: f64) -> Point {
        let spread = c_max * c_max - self.c_min * self.c_min;
        if spread <= 0.0 {
            // Degenerate ellipse (best cost equals the straight-line
            // distance); fall back to uniform.
            return self.uniform(rng);
        }
        let semi_major = c_max / 2.0;
        let semi_minor = spread.sqrt() / 2.0;
        let angle = self.start.bearing_to(self.goal);
        let (cx, cy) = self.start.midpoint_f64(self.goal);

        // Area-uniform draw on the unit disk, scaled to the ellipse axes.
        let theta = TAU * rng.random::<f64>();
        let r = rng.random::<f64>().sqrt();
        let ex = semi_major * r * theta.cos();
        let ey = semi_minor * r * theta.sin();

        // Rotate into the start->goal frame and translate to the center.
        let (sin_a, cos_a) = angle.sin_cos();
        let x = ex * cos_a - ey * sin_a + cx;
        let y = ex * sin_a + ey * cos_a + cy;
        Point::new(x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn sampler() -> Sampler {
        Sampler::new(
            Range::new(0, 0, 100, 100),
            Point::new(10, 10),
            Point::new(80, 60),
        )
    }

    #[test]
    fn uniform_stays_in_bounds() {
        let s = sampler();
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = s.sample(&mut rng, None);
            assert!(s.bounds.contains(p), "{p} out of bounds");
        }
    }

    #[test]
    fn informed_samples_lie_in_the_ellipse() {
        let s = sampler();
        let mut rng = SmallRng::seed_from_u64(2);
        let c_max = s.c_min * 1.4;
        for _ in 0..1000 {
            let p = s.sample(&mut rng, Some(c_max));
            let focal_sum = euclidean(p, s.start) + euclidean(p, s.goal);
            // Integer truncation can push a point at most one cell on each
            // axis, adding under 2*sqrt(2) to the focal sum.
            assert!(
                focal_sum <= c_max + 2.0 * std::f64::consts::SQRT_2,
                "focal sum {focal_sum} exceeds {c_max} at {p}"
            );
        }
    }

    #[test]
    fn narrower_cost_narrows_the_spread() {
        let s = sampler();
        let mut rng = SmallRng::seed_from_u64(3);
        let tight = s.c_min * 1.05;
        for _ in 0..500 {
            let p = s.sample(&mut rng, Some(tight));
            let focal_sum = euclidean(p, s.start) + euclidean(p, s.goal);
            assert!(focal_sum <= tight + 2.0 * std::f64::consts::SQRT_2);
        }
    }

    #[test]
    fn degenerate_ellipse_falls_back_to_uniform() {
        let s = sampler();
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..200 {
            let p = s.sample(&mut rng, Some(s.c_min));
            assert!(s.bounds.contains(p));
        }
    }

    #[test]
    fn coincident_start_and_goal_still_sample() {
        let s = Sampler::new(Range::new(0, 0, 20, 20), Point::new(5, 5), Point::new(5, 5));
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..100 {
            let p = s.sample(&mut rng, Some(0.0));
            assert!(s.bounds.contains(p));
        }
    }
}
