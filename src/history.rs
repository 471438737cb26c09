//! Run outputs: per-iteration population snapshots and the final record
//!
//! Snapshots live in one flat arena indexed by iteration number. Each entry
//! is `population_size * dimension` values in candidate order.

use crate::environment::Environment;
use crate::types::Point3;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Arena of fixed-size population snapshots
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulationHistory {
    population_size: usize,
    dimension: usize,
    coords: Vec<f64>,
}

impl PopulationHistory {
    /// Empty arena sized for `iterations` snapshots
    pub fn with_capacity(population_size: usize, dimension: usize, iterations: usize) -> Self {
        Self {
            population_size,
            dimension,
            coords: Vec::with_capacity(population_size * dimension * iterations),
        }
    }

    /// Append one snapshot. The iterator must yield `population_size`
    /// candidates of `dimension` values each.
    pub(crate) fn record<'a, I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        for candidate in candidates {
            debug_assert_eq!(candidate.len(), self.dimension);
            self.coords.extend_from_slice(candidate);
        }
    }

    fn stride(&self) -> usize {
        self.population_size * self.dimension
    }

    /// Number of recorded iterations
    pub fn len(&self) -> usize {
        match self.stride() {
            0 => 0,
            stride => self.coords.len() / stride,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Values per candidate (waypoints x 3)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Snapshot taken at the start of iteration `iteration`
    pub fn snapshot(&self, iteration: usize) -> Option<PopulationSnapshot<'_>> {
        let stride = self.stride();
        let begin = iteration.checked_mul(stride)?;
        let coords = self.coords.get(begin..begin.checked_add(stride)?)?;
        Some(PopulationSnapshot {
            coords,
            dimension: self.dimension,
        })
    }

    /// Snapshots in iteration order
    pub fn iter(&self) -> impl Iterator<Item = PopulationSnapshot<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.snapshot(i))
    }

    /// Drop every snapshot and give the memory back
    pub fn clear(&mut self) {
        self.coords = Vec::new();
    }
}

/// Read-only view of one recorded population
#[derive(Debug, Clone, Copy)]
pub struct PopulationSnapshot<'a> {
    coords: &'a [f64],
    dimension: usize,
}

impl<'a> PopulationSnapshot<'a> {
    /// Number of candidates
    pub fn len(&self) -> usize {
        match self.dimension {
            0 => 0,
            dim => self.coords.len() / dim,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat coordinates of one candidate
    pub fn candidate(&self, index: usize) -> Option<&'a [f64]> {
        let begin = index.checked_mul(self.dimension)?;
        self.coords.get(begin..begin.checked_add(self.dimension)?)
    }

    /// Waypoints of one candidate
    pub fn waypoints(&self, index: usize) -> Option<Vec<Point3>> {
        self.candidate(index)
            .map(|c| c.chunks_exact(3).filter_map(Point3::from_slice).collect())
    }

    /// Candidate waypoints embedded between start and goal
    pub fn full_path(&self, index: usize, env: &Environment) -> Option<Vec<Point3>> {
        self.candidate(index).map(|c| env.full_path(c))
    }

    /// Candidates in index order
    pub fn candidates(&self) -> impl Iterator<Item = &'a [f64]> {
        // chunks_exact(0) panics
        self.coords.chunks_exact(self.dimension.max(1))
    }
}

/// Everything a finished run hands back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// `[start, alpha waypoints.., goal]`
    pub best_path: Vec<Point3>,
    /// Alpha fitness at the end of the run
    pub best_fitness: f64,
    /// Alpha fitness after each iteration
    pub fitness_history: Vec<f64>,
    /// Pre-update population of each iteration
    pub population_history: PopulationHistory,
    /// Seed the run was started from
    pub seed: u64,
}

impl RunRecord {
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Best path without the fixed start and goal
    pub fn best_waypoints(&self) -> &[Point3] {
        match self.best_path.len() {
            0..=2 => &[],
            n => &self.best_path[1..n - 1],
        }
    }

    /// Number of completed iterations
    pub fn iterations(&self) -> usize {
        self.fitness_history.len()
    }

    /// Free the population history once no collaborator needs it
    pub fn release_history(&mut self) {
        self.population_history.clear();
    }
}
