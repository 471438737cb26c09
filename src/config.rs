//! Run configuration for the optimizer

use crate::gwo::GwoVariant;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Optimizer run parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GwoConfig {
    /// Number of wolves (search agents)
    pub population_size: usize,
    /// Fixed iteration budget
    pub max_iterations: usize,
    /// Seed of the random stream
    pub seed: u64,
    /// Initialization, decay and update rules
    pub variant: GwoVariant,
    /// Keep a snapshot of the pack for every iteration
    pub record_history: bool,
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            max_iterations: 200,
            seed: 0,
            variant: GwoVariant::Baseline,
            record_history: true,
        }
    }
}

impl GwoConfig {
    /// Baseline GWO with the default budget
    pub fn baseline(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Weighted-dynamic GWO with the default budget and a gap factor of 50
    pub fn improved(seed: u64) -> Self {
        Self {
            seed,
            variant: GwoVariant::WeightedDynamic { dynamic_g: 50.0 },
            ..Self::default()
        }
    }

    /// Same configuration with a seed drawn from OS entropy
    #[cfg(feature = "std")]
    pub fn with_random_seed(self) -> Result<Self> {
        Ok(Self {
            seed: crate::rng::random_seed()?,
            ..self
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(PlannerError::InvalidParameter);
        }
        if self.max_iterations == 0 {
            return Err(PlannerError::InvalidParameter);
        }
        if let GwoVariant::WeightedDynamic { dynamic_g } = self.variant {
            if !dynamic_g.is_finite() || dynamic_g < 0.0 {
                return Err(PlannerError::InvalidParameter);
            }
        }
        Ok(())
    }
}
