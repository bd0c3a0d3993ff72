//! GA parameters.
//!
//! [`GaParams`] holds the operator rates and elitism settings that control
//! each generation. Pool size and genome length are passed to
//! [`GaEngine::init`](super::GaEngine::init) directly.

use crate::error::{GaError, Result};

/// Operator parameters for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use bitga::ga::GaParams;
///
/// let params = GaParams::default();
/// assert_eq!(params.elite_count, 5);
/// assert!((params.crossover_rate - 0.65).abs() < 1e-12);
/// assert!((params.mutation_rate - 0.002).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::ga::GaParams;
///
/// let params = GaParams::default()
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.01)
///     .with_elite_count(2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaParams {
    /// Probability that a drawn parent pair is recombined (0.0–1.0).
    ///
    /// Otherwise both parents are cloned into the next generation, unless
    /// they were already placed there.
    pub crossover_rate: f64,

    /// Independent per-bit flip probability applied after assembly (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of top individuals carried into every next generation.
    pub elite_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            crossover_rate: 0.65,
            mutation_rate: 0.002,
            elite_count: 5,
            seed: None,
        }
    }
}

impl GaParams {
    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites (0 disables elitism).
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters against a pool size and genome length.
    pub fn validate(&self, pool_size: usize, genome_bits: usize) -> Result<()> {
        if pool_size == 0 {
            return Err(GaError::InvalidConfig(
                "pool_size must be at least 1".into(),
            ));
        }
        if genome_bits == 0 {
            return Err(GaError::InvalidConfig(
                "genome bit length must be at least 1".into(),
            ));
        }
        if self.elite_count > pool_size {
            return Err(GaError::InvalidConfig(format!(
                "elite_count ({}) exceeds pool_size ({})",
                self.elite_count, pool_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::InvalidConfig(format!(
                "crossover_rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
