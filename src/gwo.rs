//! Grey Wolf Optimizer (GWO) for 3-D path planning
//!
//! Each wolf is one flat candidate of `waypoints x 3` coordinates. Three
//! leaders (alpha, beta, delta) pull the pack towards them while the decay
//! parameter `a` shrinks the step size from exploration to exploitation.
//!
//! Two variants:
//! - [`GwoVariant::Baseline`]: uniform initialization over the whole search
//!   box, linear decay of `a`, arithmetic mean of the three leader proposals.
//! - [`GwoVariant::WeightedDynamic`]: initialization inside the box spanned by
//!   start and goal, cosine decay of `a`, and a fitness-weighted mean of the
//!   proposals whenever the alpha/delta score gap exceeds `dynamic_g * a`.
//!
//! Leader bookkeeping is a single pass over the pack in index order, compared
//! against the live leader scores. A new alpha does not push the old alpha
//! down to beta, so the leaders are not a sorted top three of the pack.
//!
//! References:
//! - Mirjalili et al. (2014): Grey Wolf Optimizer

use crate::config::GwoConfig;
use crate::environment::{Bounds, Environment};
use crate::history::{PopulationHistory, RunRecord};
use crate::objective;
use crate::rng::OptimizationRng;
use crate::types::*;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

/// Default alpha/delta gap factor of the weighted variant
pub const DEFAULT_DYNAMIC_G: f64 = 100.0;

/// GWO algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GwoVariant {
    /// Global-box initialization, linear decay, arithmetic mean
    Baseline,
    /// Start/goal-box initialization, cosine decay, gated weighted mean
    WeightedDynamic {
        /// Gap factor: weighting kicks in when `|alpha - delta| > dynamic_g * a`
        dynamic_g: f64,
    },
}

impl GwoVariant {
    /// Weighted variant with [`DEFAULT_DYNAMIC_G`]
    pub const fn weighted_dynamic() -> Self {
        GwoVariant::WeightedDynamic {
            dynamic_g: DEFAULT_DYNAMIC_G,
        }
    }

    /// Decay parameter `a` for an iteration, starting at 2
    pub fn decay(&self, iteration: usize, max_iterations: usize) -> f64 {
        let progress = iteration as f64 / max_iterations as f64;
        match self {
            GwoVariant::Baseline => 2.0 - iteration as f64 * (2.0 / max_iterations as f64),
            GwoVariant::WeightedDynamic { .. } => 2.0 * libm::cos(progress * FRAC_PI_2),
        }
    }

    /// Box the initial pack is drawn from
    pub fn initialization_box(&self, env: &Environment) -> Bounds {
        match self {
            GwoVariant::Baseline => *env.bounds(),
            GwoVariant::WeightedDynamic { .. } => Bounds::spanning(&env.start(), &env.goal()),
        }
    }

    /// Whether this iteration combines proposals with fitness weights.
    ///
    /// `stale` are the leader scores from before this iteration's leader
    /// update. Unset (infinite) scores or a zero weight sum fall back to the
    /// arithmetic mean.
    pub fn uses_weighted_average(&self, stale: &LeaderScores, a: f64) -> bool {
        match self {
            GwoVariant::Baseline => false,
            GwoVariant::WeightedDynamic { dynamic_g } => {
                let total = stale.total();
                stale.all_finite()
                    && total != 0.0
                    && libm::fabs(stale.alpha - stale.delta) > dynamic_g * a
            }
        }
    }

    /// Combine the alpha, beta and delta proposals for one coordinate
    pub fn combine(&self, proposals: [f64; 3], weights: Option<&LeaderScores>) -> f64 {
        let [x_alpha, x_beta, x_delta] = proposals;
        match (self, weights) {
            (GwoVariant::WeightedDynamic { .. }, Some(w)) => {
                (w.alpha * x_alpha + w.beta * x_beta + w.delta * x_delta) / w.total()
            }
            _ => (x_alpha + x_beta + x_delta) / 3.0,
        }
    }
}

/// Grey wolf agent
#[derive(Debug, Clone, PartialEq)]
pub struct Wolf {
    /// Flat waypoint coordinates
    pub position: Vec<f64>,
    /// Fitness from the latest evaluation
    pub fitness: f64,
    /// Index in the pack
    pub id: usize,
}

impl Wolf {
    /// Create a wolf at the origin
    pub fn new(dimensions: usize, id: usize) -> Self {
        Self {
            position: vec![0.0; dimensions],
            fitness: f64::INFINITY,
            id,
        }
    }

    /// Draw every coordinate uniformly inside `bounds`
    pub fn initialize(&mut self, bounds: &Bounds, rng: &mut OptimizationRng) {
        for (i, coord) in self.position.iter_mut().enumerate() {
            let axis = bounds.for_coordinate(i);
            *coord = rng.next_f64_range(axis.min, axis.max);
        }
    }

    /// Replace the position, clamping each coordinate into `bounds`
    pub fn update_position(&mut self, new_position: &[f64], bounds: &Bounds) {
        for (i, (coord, &val)) in self.position.iter_mut().zip(new_position).enumerate() {
            *coord = bounds.for_coordinate(i).clamp(val);
        }
    }
}

/// Leader rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderRank {
    Alpha,
    Beta,
    Delta,
}

/// One leader slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub position: Vec<f64>,
    pub fitness: f64,
}

impl Leader {
    fn empty(dimensions: usize) -> Self {
        Self {
            position: vec![0.0; dimensions],
            fitness: f64::INFINITY,
        }
    }

    fn replace(&mut self, position: &[f64], fitness: f64) {
        self.position.clear();
        self.position.extend_from_slice(position);
        self.fitness = fitness;
    }
}

/// Leader fitness values at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderScores {
    pub alpha: f64,
    pub beta: f64,
    pub delta: f64,
}

impl LeaderScores {
    pub fn total(&self) -> f64 {
        self.alpha + self.beta + self.delta
    }

    pub fn all_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite() && self.delta.is_finite()
    }
}

/// Alpha, beta and delta, owned by the optimizer for the whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSet {
    pub alpha: Leader,
    pub beta: Leader,
    pub delta: Leader,
}

impl LeaderSet {
    /// Unset leaders: zero positions, infinite fitness
    pub fn new(dimensions: usize) -> Self {
        Self {
            alpha: Leader::empty(dimensions),
            beta: Leader::empty(dimensions),
            delta: Leader::empty(dimensions),
        }
    }

    /// Offer one candidate to the leaders.
    ///
    /// First match wins: better than alpha replaces alpha, else better than
    /// beta replaces beta, else better than delta replaces delta. Displaced
    /// leaders are dropped, not shifted down.
    pub fn absorb(&mut self, position: &[f64], fitness: f64) -> Option<LeaderRank> {
        if fitness < self.alpha.fitness {
            self.alpha.replace(position, fitness);
            Some(LeaderRank::Alpha)
        } else if fitness < self.beta.fitness {
            self.beta.replace(position, fitness);
            Some(LeaderRank::Beta)
        } else if fitness < self.delta.fitness {
            self.delta.replace(position, fitness);
            Some(LeaderRank::Delta)
        } else {
            None
        }
    }

    pub fn scores(&self) -> LeaderScores {
        LeaderScores {
            alpha: self.alpha.fitness,
            beta: self.beta.fitness,
            delta: self.delta.fitness,
        }
    }

    fn coords(&self, d: usize) -> [f64; 3] {
        [
            self.alpha.position[d],
            self.beta.position[d],
            self.delta.position[d],
        ]
    }
}

/// Grey Wolf Optimizer bound to one environment
pub struct GwoOptimizer<'e> {
    env: &'e Environment,
    config: GwoConfig,
    wolves: Vec<Wolf>,
    leaders: LeaderSet,
    rng: OptimizationRng,
    iteration: usize,
    a: f64,
    fitness_history: Vec<f64>,
    population_history: PopulationHistory,
}

impl<'e> GwoOptimizer<'e> {
    /// Validate the config, seed the stream and draw the initial pack
    pub fn new(env: &'e Environment, config: GwoConfig) -> Result<Self> {
        config.validate()?;

        let dimensions = env.dimension();
        let mut rng = OptimizationRng::new(config.seed);
        let init_box = config.variant.initialization_box(env);

        let wolves = (0..config.population_size)
            .map(|id| {
                let mut wolf = Wolf::new(dimensions, id);
                wolf.initialize(&init_box, &mut rng);
                wolf
            })
            .collect();

        let population_history = if config.record_history {
            PopulationHistory::with_capacity(
                config.population_size,
                dimensions,
                config.max_iterations,
            )
        } else {
            PopulationHistory::with_capacity(config.population_size, dimensions, 0)
        };

        Ok(Self {
            env,
            wolves,
            leaders: LeaderSet::new(dimensions),
            rng,
            iteration: 0,
            a: 2.0,
            fitness_history: Vec::with_capacity(config.max_iterations),
            population_history,
            config,
        })
    }

    /// Advance one iteration. Returns the alpha fitness, or `None` once the
    /// iteration budget is spent.
    pub fn step(&mut self) -> Option<f64> {
        if self.is_finished() {
            return None;
        }
        let iter = self.iteration;
        let variant = self.config.variant;

        if self.config.record_history {
            self.population_history
                .record(self.wolves.iter().map(|w| w.position.as_slice()));
        }

        let stale = self.leaders.scores();
        self.evaluate_pack();
        self.update_leaders();

        self.a = variant.decay(iter, self.config.max_iterations);
        let weights = if variant.uses_weighted_average(&stale, self.a) {
            trace!("iteration {}: fitness-weighted update", iter);
            Some(stale)
        } else {
            None
        };

        let bounds = *self.env.bounds();
        let mut new_position = vec![0.0; self.env.dimension()];
        for wolf in self.wolves.iter_mut() {
            for (d, slot) in new_position.iter_mut().enumerate() {
                let current = wolf.position[d];
                let leaders = self.leaders.coords(d);
                let proposals = [
                    hunt(leaders[0], current, self.a, &mut self.rng),
                    hunt(leaders[1], current, self.a, &mut self.rng),
                    hunt(leaders[2], current, self.a, &mut self.rng),
                ];
                *slot = variant.combine(proposals, weights.as_ref());
            }
            wolf.update_position(&new_position, &bounds);
        }

        let best = self.leaders.alpha.fitness;
        self.fitness_history.push(best);
        debug!("iteration {}: a = {:.4}, alpha fitness = {:.4}", iter, self.a, best);

        self.iteration += 1;
        Some(best)
    }

    /// Run the remaining iterations and hand back the record
    pub fn run(mut self) -> RunRecord {
        info!(
            "GWO run: {:?}, {} wolves, {} iterations, dimension {}, seed {}",
            self.config.variant,
            self.config.population_size,
            self.config.max_iterations,
            self.env.dimension(),
            self.config.seed
        );

        while self.step().is_some() {}

        let best_path = self.env.full_path(&self.leaders.alpha.position);
        let cost = objective::evaluate_path(self.env, &self.leaders.alpha.position);
        info!(
            "GWO run complete: best fitness {:.4}, length {:.3}, {} colliding segments",
            cost.fitness, cost.total_distance, cost.collision_count
        );
        if !cost.is_collision_free() {
            warn!(
                "best path still crosses no-fly zones on {} segments (seed {})",
                cost.collision_count, self.config.seed
            );
        }

        RunRecord {
            best_path,
            best_fitness: self.leaders.alpha.fitness,
            fitness_history: self.fitness_history,
            population_history: self.population_history,
            seed: self.config.seed,
        }
    }

    fn evaluate_pack(&mut self) {
        let env = self.env;
        for wolf in self.wolves.iter_mut() {
            wolf.fitness = objective::fitness(env, &wolf.position);
        }
    }

    /// Offer every wolf to the leaders in index order
    fn update_leaders(&mut self) {
        for wolf in &self.wolves {
            if let Some(rank) = self.leaders.absorb(&wolf.position, wolf.fitness) {
                trace!(
                    "iteration {}: wolf {} becomes {:?} ({:.4})",
                    self.iteration,
                    wolf.id,
                    rank,
                    wolf.fitness
                );
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }

    pub fn wolves(&self) -> &[Wolf] {
        &self.wolves
    }

    pub fn leaders(&self) -> &LeaderSet {
        &self.leaders
    }

    /// Completed iterations
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Decay parameter used by the latest iteration
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    pub fn population_history(&self) -> &PopulationHistory {
        &self.population_history
    }

    pub fn config(&self) -> &GwoConfig {
        &self.config
    }
}

/// Proposal towards one leader: two draws, `r1` then `r2`
#[allow(non_snake_case)] // Mathematical notation from GWO algorithm
fn hunt(leader: f64, current: f64, a: f64, rng: &mut OptimizationRng) -> f64 {
    let r1 = rng.next_f64();
    let r2 = rng.next_f64();
    let A = 2.0 * a * r1 - a;
    let C = 2.0 * r2;
    leader - A * libm::fabs(C * leader - current)
}

/// Plan a path: run GWO for a fixed budget from a seed
pub fn optimize(
    env: &Environment,
    population_size: usize,
    max_iterations: usize,
    seed: u64,
    variant: GwoVariant,
) -> Result<RunRecord> {
    let config = GwoConfig {
        population_size,
        max_iterations,
        seed,
        variant,
        ..GwoConfig::default()
    };
    Ok(GwoOptimizer::new(env, config)?.run())
}
