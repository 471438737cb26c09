//! Path fitness: weighted distance plus collision penalty
//!
//! `fitness = (W_DISTANCE * total_distance + W_COLLISION * collision_count) * FITNESS_SCALE`
//!
//! The collision weight dwarfs the distance weight, so any collision-free
//! path beats any colliding one while collision-free paths are still ranked
//! by length. Lower is better.

use crate::collision::count_colliding_segments;
use crate::environment::Environment;
use crate::types::Point3;
use serde::{Deserialize, Serialize};

/// Weight on total path length
pub const W_DISTANCE: f64 = 1e-4;

/// Weight on the number of colliding segments
pub const W_COLLISION: f64 = 1.0 - W_DISTANCE;

/// Final scale applied to the weighted sum
pub const FITNESS_SCALE: f64 = 1e6;

/// Breakdown of a path evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCost {
    /// Sum of segment lengths from start to goal
    pub total_distance: f64,
    /// Segments touching at least one no-fly zone
    pub collision_count: usize,
    /// Scalar fitness (lower is better)
    pub fitness: f64,
}

impl PathCost {
    /// Whether the path avoids every no-fly zone
    pub fn is_collision_free(&self) -> bool {
        self.collision_count == 0
    }
}

/// Combine distance and collision count into the scalar fitness
pub fn fitness_from_parts(total_distance: f64, collision_count: usize) -> f64 {
    (W_DISTANCE * total_distance + W_COLLISION * collision_count as f64) * FITNESS_SCALE
}

/// Sum of consecutive segment lengths
pub fn path_length(path: &[Point3]) -> f64 {
    path.windows(2).map(|s| s[0].distance_to(&s[1])).sum()
}

/// Evaluate a flat candidate (`waypoints x 3`) against the environment
pub fn evaluate_path(env: &Environment, candidate: &[f64]) -> PathCost {
    let path = env.full_path(candidate);
    let total_distance = path_length(&path);
    let collision_count = count_colliding_segments(&path, env.no_fly_zones());

    PathCost {
        total_distance,
        collision_count,
        fitness: fitness_from_parts(total_distance, collision_count),
    }
}

/// Scalar fitness of a flat candidate
pub fn fitness(env: &Environment, candidate: &[f64]) -> f64 {
    evaluate_path(env, candidate).fitness
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(W_DISTANCE + W_COLLISION, 1.0);
        assert!((fitness_from_parts(10.0, 0) - 1000.0).abs() < 1e-9);
        assert!((fitness_from_parts(0.0, 1) - 999_900.0).abs() < 1e-6);
    }

    #[test]
    fn test_collision_dominates_distance() {
        // A very long clear path still beats a short colliding one
        assert!(fitness_from_parts(5_000.0, 0) < fitness_from_parts(10.0, 1));
    }

    #[test]
    fn test_straight_line_cost() {
        let env = crate::environment::Environment::compact_course().unwrap();
        let start = env.start();
        let goal = env.goal();
        let candidate: alloc::vec::Vec<f64> = (1..=env.waypoint_count())
            .flat_map(|i| {
                let t = i as f64 / (env.waypoint_count() + 1) as f64;
                [
                    start.x + t * (goal.x - start.x),
                    start.y + t * (goal.y - start.y),
                    start.z + t * (goal.z - start.z),
                ]
            })
            .collect();

        let cost = evaluate_path(&env, &candidate);
        assert!((cost.total_distance - start.distance_to(&goal)).abs() < 1e-9);
        assert!(!cost.is_collision_free());
    }
}
