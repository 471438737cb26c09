//! # GWO Path Planner
//!
//! Plans a short, collision-free 3-D flight path for a UAV from a fixed start
//! to a fixed goal through a field of cylindrical no-fly zones, using the
//! Grey Wolf Optimizer.
//!
//! ## Pipeline
//! - [`environment`]: validated problem instance (start, goal, search box,
//!   no-fly zones, waypoint count)
//! - [`collision`]: exact segment / vertical-cylinder intersection
//! - [`objective`]: path length plus a dominating collision penalty
//! - [`gwo`]: seeded GWO loop with baseline and weighted-dynamic variants
//!
//! ## Example
//! ```
//! use gwo_path_planner::{optimize, Environment, GwoVariant};
//!
//! let env = Environment::compact_course().unwrap();
//! let record = optimize(&env, 10, 25, 42, GwoVariant::Baseline).unwrap();
//!
//! assert_eq!(record.fitness_history.len(), 25);
//! assert_eq!(record.best_path.first(), Some(&env.start()));
//! assert_eq!(record.best_path.last(), Some(&env.goal()));
//! ```
//!
//! Runs are deterministic: the same environment, configuration and seed give
//! bit-identical results. Rendering and export are left to the caller, which
//! reads the [`RunRecord`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)] // Iteration counts as f64
#![allow(clippy::suboptimal_flops)] // Keep the textbook GWO expressions
#![allow(clippy::float_cmp)]

extern crate alloc;

/// Segment / cylinder intersection tests
pub mod collision;
/// Optimizer run parameters and presets
pub mod config;
/// Problem instance: start, goal, bounds and no-fly zones
pub mod environment;
/// Grey Wolf Optimizer (GWO) core loop
pub mod gwo;
/// Population snapshots and run records
pub mod history;
/// Path fitness: distance plus collision penalty
pub mod objective;
/// Seeded random number generation
pub mod rng;
/// Core types (Point3, PlannerError, Result)
pub mod types;

pub use config::GwoConfig;
pub use environment::{AxisBounds, Bounds, Environment, NoFlyZone};
pub use gwo::{optimize, GwoOptimizer, GwoVariant, DEFAULT_DYNAMIC_G};
pub use history::{PopulationHistory, PopulationSnapshot, RunRecord};
pub use objective::{evaluate_path, PathCost};
pub use types::*;
