//! Bit-string genetic algorithm.
//!
//! A generational GA over fixed-length, bit-packed genomes. The caller
//! supplies a [`FitnessFunction`] (higher is better); [`GaEngine`] handles
//! initialization, scoring, selection, crossover, and mutation.
//!
//! # Key Types
//!
//! - [`GaParams`]: Operator rates, elite count, seed
//! - [`GaEngine`]: Owns the population and advances it one generation at a time
//! - [`Genome`]: Bit-packed genome with MSB-first bit-string rendering
//! - [`Individual`]: A genome with its fitness
//! - [`GenerationStats`]: Best/average fitness of one generation
//!
//! # Submodules
//!
//! - [`operators`]: Single-point bit crossover and per-bit mutation
//! - [`selection`]: Roulette-wheel parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod engine;
mod genome;
pub mod operators;
pub mod selection;
mod types;

pub use config::GaParams;
pub use engine::{GaEngine, GenerationStats};
pub use genome::Genome;
pub use selection::RouletteWheel;
pub use types::{FitnessFunction, Individual};
