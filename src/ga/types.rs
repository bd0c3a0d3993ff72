//! Core types shared by the engine: the fitness contract and the
//! individual record.

use super::genome::Genome;

/// Maps a genome to a real-valued score. Higher is better.
///
/// Implementations must be pure: the engine calls [`evaluate`] exactly once
/// per individual per scoring pass and trusts the returned value as-is.
///
/// Any `Fn(&[u8]) -> f64` closure implements this trait.
///
/// ```
/// use bitga::ga::FitnessFunction;
///
/// let ones = |g: &[u8]| g.iter().map(|b| b.count_ones()).sum::<u32>() as f64;
/// assert_eq!(ones.evaluate(&[0xFF, 0x01]), 9.0);
/// ```
///
/// [`evaluate`]: FitnessFunction::evaluate
pub trait FitnessFunction {
    /// Scores the raw genome bytes.
    fn evaluate(&self, genome: &[u8]) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[u8]) -> f64,
{
    fn evaluate(&self, genome: &[u8]) -> f64 {
        self(genome)
    }
}

/// A genome paired with its most recent fitness score.
///
/// The fitness is only meaningful after the engine's last scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    fitness: f64,
}

impl Individual {
    /// Wraps an unscored genome.
    pub fn new(genome: Genome) -> Self {
        Self {
            genome,
            fitness: 0.0,
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// MSB-first `'0'`/`'1'` rendering of the genome.
    pub fn bit_string(&self) -> String {
        self.genome.bit_string()
    }

    pub(crate) fn genome_mut(&mut self) -> &mut Genome {
        &mut self.genome
    }

    pub(crate) fn score<F: FitnessFunction + ?Sized>(&mut self, fitness_fn: &F) {
        self.fitness = fitness_fn.evaluate(self.genome.as_bytes());
    }
}
