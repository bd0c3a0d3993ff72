//! Generational bit-string genetic algorithm.
//!
//! Maintains a population of fixed-length, bit-packed genomes scored by a
//! caller-supplied fitness function (higher is better), and advances it one
//! generation at a time:
//!
//! - **Elitism**: the top-N individuals are carried over unchanged by
//!   crossover (mutation still applies).
//! - **Roulette-wheel selection**: fitness-proportionate parent draws over a
//!   cumulative distribution, with distinct parents in every pair.
//! - **Single-point crossover**: bit-granular split of two parent genomes.
//! - **Per-bit mutation**: each bit flips independently with a fixed rate.
//!
//! All randomness flows through one explicit, seedable generator (see
//! [`random`]), so a fixed seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use bitga::ga::{GaEngine, GaParams};
//!
//! let ones = |genome: &[u8]| genome.iter().map(|b| b.count_ones()).sum::<u32>() as f64;
//! let params = GaParams::default().with_seed(42);
//!
//! let mut engine = GaEngine::init(20, 8, ones, params).unwrap();
//! engine.evolve_generations(10).unwrap();
//!
//! assert_eq!(engine.generation(), 10);
//! assert_eq!(engine.population().len(), 20);
//! assert_eq!(engine.best_history().len(), 11);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
