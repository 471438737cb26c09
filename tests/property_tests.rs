//! Property-based tests for the path planner
//!
//! These tests verify geometric properties and optimizer invariants that
//! should hold for all inputs, using randomized testing with proptest.

use gwo_path_planner::collision::segment_intersects_zone;
use gwo_path_planner::*;
use proptest::prelude::*;

// ============================================================================
// COLLISION GEOMETRY PROPERTIES
// ============================================================================

#[cfg(test)]
mod geometry_properties {
    use super::*;

    proptest! {
        #[test]
        fn segment_outside_footprint_never_intersects(
            radius in 0.5_f64..5.0,
            height in 0.0_f64..50.0,
            gap1 in 0.01_f64..100.0,
            gap2 in 0.01_f64..100.0,
            y1 in -100.0_f64..100.0,
            y2 in -100.0_f64..100.0,
            z1 in -20.0_f64..80.0,
            z2 in -20.0_f64..80.0,
        ) {
            // Both endpoints in the half-plane x > radius, which the disk never reaches
            let zone = NoFlyZone::new(0.0, 0.0, height, radius);
            let start = Point3::new(radius + gap1, y1, z1);
            let end = Point3::new(radius + gap2, y2, z2);

            prop_assert!(!segment_intersects_zone(&start, &end, &zone));
        }

        #[test]
        fn segment_through_axis_always_intersects(
            cx in -100.0_f64..100.0,
            cy in -100.0_f64..100.0,
            radius in 0.5_f64..5.0,
            height in 1.0_f64..50.0,
            half_length in 0.1_f64..30.0,
            angle in 0.0_f64..core::f64::consts::TAU,
            t1 in 0.0_f64..=1.0,
            t2 in 0.0_f64..=1.0,
        ) {
            let zone = NoFlyZone::new(cx, cy, height, radius);
            let (dx, dy) = (half_length * angle.cos(), half_length * angle.sin());
            let start = Point3::new(cx - dx, cy - dy, t1 * height);
            let end = Point3::new(cx + dx, cy + dy, t2 * height);

            prop_assert!(segment_intersects_zone(&start, &end, &zone));
        }

        #[test]
        fn intersection_is_symmetric(
            x1 in 0.0_f64..20.0, y1 in 0.0_f64..20.0, z1 in 0.0_f64..20.0,
            x2 in 0.0_f64..20.0, y2 in 0.0_f64..20.0, z2 in 0.0_f64..20.0,
        ) {
            let zone = NoFlyZone::new(10.0, 10.0, 12.0, 3.0);
            let a = Point3::new(x1, y1, z1);
            let b = Point3::new(x2, y2, z2);

            prop_assert_eq!(
                segment_intersects_zone(&a, &b, &zone),
                segment_intersects_zone(&b, &a, &zone)
            );
        }
    }
}

// ============================================================================
// OBJECTIVE PROPERTIES
// ============================================================================

#[cfg(test)]
mod objective_properties {
    use super::*;

    proptest! {
        #[test]
        fn path_never_shorter_than_straight_line(
            candidate in prop::collection::vec(0.0_f64..20.0, 12),
        ) {
            let env = Environment::compact_course().unwrap();
            let cost = evaluate_path(&env, &candidate);
            let straight = env.start().distance_to(&env.goal());

            prop_assert!(cost.total_distance >= straight - 1e-9);
            prop_assert!(cost.collision_count <= env.waypoint_count() + 1);
            prop_assert!(cost.fitness.is_finite());
        }

        #[test]
        fn clamp_lands_on_nearest_edge(
            min in -100.0_f64..100.0,
            width in 0.0_f64..100.0,
            value in -500.0_f64..500.0,
        ) {
            let axis = AxisBounds::new(min, min + width);
            let clamped = axis.clamp(value);

            prop_assert!(axis.contains(clamped));
            if value < axis.min {
                prop_assert_eq!(clamped, axis.min);
            } else if value > axis.max {
                prop_assert_eq!(clamped, axis.max);
            } else {
                prop_assert_eq!(clamped, value);
            }
        }
    }
}

// ============================================================================
// OPTIMIZER PROPERTIES
// ============================================================================

#[cfg(test)]
mod optimizer_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn runs_are_reproducible(
            seed in any::<u64>(),
            weighted in any::<bool>(),
        ) {
            let env = Environment::compact_course().unwrap();
            let variant = if weighted { GwoVariant::weighted_dynamic() } else { GwoVariant::Baseline };

            let first = optimize(&env, 6, 8, seed, variant).unwrap();
            let second = optimize(&env, 6, 8, seed, variant).unwrap();

            prop_assert_eq!(&first.best_path, &second.best_path);
            prop_assert_eq!(
                first.fitness_history.iter().map(|f| f.to_bits()).collect::<Vec<_>>(),
                second.fitness_history.iter().map(|f| f.to_bits()).collect::<Vec<_>>()
            );
        }

        #[test]
        fn pack_stays_in_bounds_and_alpha_never_worsens(
            seed in any::<u64>(),
            population_size in 1_usize..12,
            dynamic_g in 0.0_f64..200.0,
        ) {
            let env = Environment::compact_course().unwrap();
            let config = GwoConfig {
                population_size,
                max_iterations: 15,
                seed,
                variant: GwoVariant::WeightedDynamic { dynamic_g },
                record_history: false,
            };
            let mut optimizer = GwoOptimizer::new(&env, config).unwrap();

            let mut previous = f64::INFINITY;
            while let Some(alpha) = optimizer.step() {
                prop_assert!(alpha <= previous);
                previous = alpha;
                for wolf in optimizer.wolves() {
                    for (i, &coord) in wolf.position.iter().enumerate() {
                        prop_assert!(env.bounds().for_coordinate(i).contains(coord));
                    }
                }
            }
        }
    }
}
