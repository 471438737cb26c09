//! Tests for segment / no-fly zone intersection and path cost
//!
//! Tests cover:
//! - Lateral surface, cap and degenerate (vertical) segments
//! - Boundary grazing tolerances
//! - Collision counting per path segment
//! - The 20 x 20 x 20 reference scenario

use gwo_path_planner::collision::*;
use gwo_path_planner::objective::*;
use gwo_path_planner::*;

fn pillar() -> NoFlyZone {
    NoFlyZone::new(5.0, 5.0, 12.0, 2.0)
}

fn single_pillar_env() -> Environment {
    Environment::new(
        Point3::new(2.0, 2.0, 15.0),
        Point3::new(18.0, 18.0, 8.0),
        Bounds::cube(0.0, 20.0),
        vec![pillar()],
        1,
    )
    .unwrap()
}

// ============================================================================
// Segment / Cylinder Tests
// ============================================================================

mod segment_tests {
    use super::*;

    #[test]
    fn test_miss_beside_cylinder() {
        let start = Point3::new(0.0, 0.0, 5.0);
        let end = Point3::new(10.0, 0.0, 5.0);
        assert!(!segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_segment_stopping_short_misses() {
        let start = Point3::new(0.0, 5.0, 5.0);
        let end = Point3::new(2.9, 5.0, 5.0);
        assert!(!segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_segment_ending_on_surface_hits() {
        let start = Point3::new(0.0, 5.0, 5.0);
        let end = Point3::new(3.0, 5.0, 5.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_segment_at_exact_height_hits() {
        let start = Point3::new(0.0, 5.0, 12.0);
        let end = Point3::new(10.0, 5.0, 12.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_segment_at_ground_level_hits() {
        let start = Point3::new(0.0, 5.0, 0.0);
        let end = Point3::new(10.0, 5.0, 0.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_segment_below_ground_misses() {
        let start = Point3::new(0.0, 5.0, -1.0);
        let end = Point3::new(10.0, 5.0, -1.0);
        assert!(!segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_vertical_segment_outside_radius_misses() {
        let start = Point3::new(8.0, 5.0, 0.0);
        let end = Point3::new(8.0, 5.0, 20.0);
        assert!(!segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_vertical_segment_through_cylinder_hits() {
        let start = Point3::new(5.0, 5.0, 30.0);
        let end = Point3::new(5.0, 5.0, -5.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_diagonal_dive_through_top_cap() {
        let start = Point3::new(1.0, 5.0, 20.0);
        let end = Point3::new(6.0, 5.0, 11.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_climb_out_through_top_cap() {
        let start = Point3::new(5.0, 5.5, 10.0);
        let end = Point3::new(9.0, 5.5, 30.0);
        assert!(segment_intersects_zone(&start, &end, &pillar()));
    }

    #[test]
    fn test_zero_length_segment() {
        let inside = Point3::new(5.0, 5.0, 6.0);
        let outside = Point3::new(9.0, 9.0, 6.0);
        assert!(segment_intersects_zone(&inside, &inside, &pillar()));
        assert!(!segment_intersects_zone(&outside, &outside, &pillar()));
    }

    #[test]
    fn test_intersects_any() {
        let zones = [pillar(), NoFlyZone::new(15.0, 15.0, 5.0, 1.0)];
        let start = Point3::new(12.0, 15.0, 3.0);
        let end = Point3::new(18.0, 15.0, 3.0);
        assert!(segment_intersects_any(&start, &end, &zones));
        assert!(!segment_intersects_any(&start, &end, &zones[..1]));
        assert!(!segment_intersects_any(&start, &end, &[]));
    }
}

// ============================================================================
// Objective Tests
// ============================================================================

mod objective_tests {
    use super::*;

    #[test]
    fn test_path_length() {
        let path = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(3.0, 4.0, 12.0),
        ];
        assert_eq!(path_length(&path), 17.0);
    }

    #[test]
    fn test_each_colliding_segment_counts() {
        let env = single_pillar_env();
        // Both segments dive through the pillar
        let cost = evaluate_path(&env, &[5.0, 5.0, 6.0]);
        assert_eq!(cost.collision_count, 2);
        assert_eq!(cost.fitness, fitness_from_parts(cost.total_distance, 2));
    }

    #[test]
    fn test_clear_path_beats_shorter_colliding_path() {
        let env = single_pillar_env();
        let colliding = evaluate_path(&env, &[5.0, 5.0, 6.0]);
        let detour = evaluate_path(&env, &[19.0, 1.0, 19.0]);
        assert!(detour.is_collision_free());
        assert!(detour.fitness < colliding.fitness);
    }

    #[test]
    fn test_objective_is_pure() {
        let env = Environment::compact_course().unwrap();
        let candidate = [3.0, 9.0, 4.0, 8.0, 3.0, 17.0, 12.0, 17.0, 2.0, 17.0, 3.0, 9.0];
        assert_eq!(
            fitness(&env, &candidate).to_bits(),
            fitness(&env, &candidate).to_bits()
        );
    }
}

// ============================================================================
// Reference Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_straight_flight_collides_in_compact_course() {
        let env = Environment::compact_course().unwrap();
        let start = env.start();
        let goal = env.goal();

        // Within 2 units of (7, 7) at altitude ~12.8, under the 18-unit top
        assert!(segment_intersects_any(&start, &goal, env.no_fly_zones()));
        assert!(segment_intersects_zone(
            &start,
            &goal,
            &NoFlyZone::new(7.0, 7.0, 18.0, 2.0)
        ));
    }

    #[test]
    fn test_straight_flight_clears_top_of_low_pillar() {
        // Where the line is within 2 units of (5, 5) it is above z = 13
        let start = Point3::new(2.0, 2.0, 15.0);
        let goal = Point3::new(18.0, 18.0, 8.0);
        assert!(!segment_intersects_zone(&start, &goal, &pillar()));
    }

    #[test]
    fn test_low_straight_flight_hits_pillar() {
        let start = Point3::new(2.0, 2.0, 10.0);
        let goal = Point3::new(18.0, 18.0, 8.0);
        assert!(segment_intersects_zone(&start, &goal, &pillar()));
    }

    #[test]
    fn test_lateral_detour_has_no_collisions() {
        let env = single_pillar_env();
        // Stays more than 3 units from (5, 5) on both legs
        let cost = evaluate_path(&env, &[10.0, 1.0, 10.0]);
        assert_eq!(cost.collision_count, 0);
    }
}
