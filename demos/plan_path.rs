//! Plan a path through the compact course with both GWO variants
//!
//! Demonstrates:
//! - Building the reference environment
//! - Running baseline and weighted-dynamic GWO from the same seed
//! - Reading the run record (best path, convergence, history)
//!
//! Pass a seed as the first argument to replay a run; without one a fresh
//! seed is drawn and printed.

use gwo_path_planner::rng::random_seed;
use gwo_path_planner::*;

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(|_| PlannerError::InvalidParameter)?,
        None => random_seed()?,
    };

    let env = Environment::compact_course()?;
    println!("=== GWO Path Planning ===");
    println!("  Start: {:?}", env.start());
    println!("  Goal: {:?}", env.goal());
    println!("  No-fly zones: {}", env.no_fly_zones().len());
    println!("  Waypoints: {}", env.waypoint_count());
    println!("  Seed: {}", seed);

    for config in [GwoConfig::baseline(seed), GwoConfig::improved(seed)] {
        let record = GwoOptimizer::new(&env, config)?.run();
        report(&env, &config, &record);
    }

    Ok(())
}

fn report(env: &Environment, config: &GwoConfig, record: &RunRecord) {
    let flat: Vec<f64> = record
        .best_waypoints()
        .iter()
        .flat_map(|p| p.to_array())
        .collect();
    let cost = evaluate_path(env, &flat);

    println!("\n--- {:?} ---", config.variant);
    println!("  Best fitness: {:.4}", record.best_fitness);
    println!("  Path length: {:.3}", cost.total_distance);
    println!("  Colliding segments: {}", cost.collision_count);
    for (i, fitness) in record.fitness_history.iter().enumerate().step_by(50) {
        println!("  iter {:>4}: {:.4}", i, fitness);
    }
    println!("  Best path:");
    for point in &record.best_path {
        println!("    ({:7.3}, {:7.3}, {:7.3})", point.x, point.y, point.z);
    }
    println!("  Snapshots retained: {}", record.population_history.len());
}
