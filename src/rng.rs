//! Seeded random number generation for the optimizer
//!
//! Every stochastic draw of a run comes from one [`OptimizationRng`] built
//! from the run seed, so a run is replayable from `(environment, config)`
//! alone. Draw order:
//!
//! 1. Initialization: candidates in index order, waypoints in order, x then
//!    y then z, one draw per coordinate.
//! 2. Each iteration: candidates in index order, coordinates in flat order,
//!    six draws per coordinate (`r1`, `r2` for alpha, beta, delta).

#[cfg(feature = "std")]
use crate::types::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Seeded PCG-64 stream
#[derive(Debug, Clone)]
pub struct OptimizationRng {
    inner: Pcg64,
    seed: u64,
}

impl OptimizationRng {
    /// Create a stream from a run seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform draw in `[min, max)`; returns `min` when the range is empty
    pub fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Draw a fresh run seed from OS entropy
#[cfg(feature = "std")]
pub fn random_seed() -> Result<u64> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|_| PlannerError::EntropyUnavailable)?;
    Ok(u64::from_le_bytes(buf))
}
