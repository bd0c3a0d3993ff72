//! Generational GA engine.
//!
//! [`GaEngine`] owns the population and advances it one generation per
//! [`evolve`](GaEngine::evolve) call:
//! elitism → roulette selection → crossover or cloning → per-bit mutation →
//! re-scoring → sort → statistics.

use super::config::GaParams;
use super::genome::Genome;
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::RouletteWheel;
use super::types::{FitnessFunction, Individual};
use crate::error::Result;
use crate::random::{create_rng, random_seed};
use rand::rngs::StdRng;
use rand::Rng;

/// Consecutive clone draws without progress tolerated before the rest of
/// the generation is filled from unplaced individuals in rank order.
const STALL_DRAWS_PER_INDIVIDUAL: usize = 100;

/// Best and average fitness recorded for one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
}

/// A bit-string genetic algorithm over a fixed-size population.
///
/// The population is always sorted by descending fitness between calls.
/// History series grow by one entry per generation and are never truncated.
///
/// # Usage
///
/// ```
/// use bitga::ga::{GaEngine, GaParams};
///
/// let ones = |g: &[u8]| g.iter().map(|b| b.count_ones()).sum::<u32>() as f64;
/// let params = GaParams::default().with_elite_count(2).with_seed(42);
///
/// let mut engine = GaEngine::init(32, 64, ones, params)?;
/// let ran = engine.run_until(500, |e| e.best().fitness() >= 64.0)?;
///
/// assert_eq!(engine.generation(), ran);
/// assert_eq!(engine.best_history().len(), ran + 1);
/// # Ok::<(), bitga::GaError>(())
/// ```
pub struct GaEngine<F, R = StdRng> {
    population: Vec<Individual>,
    params: GaParams,
    generation: usize,
    pool_size: usize,
    genome_bits: usize,
    fitness_fn: F,
    rng: R,
    best_history: Vec<f64>,
    average_history: Vec<f64>,
}

impl<F: FitnessFunction> GaEngine<F, StdRng> {
    /// Builds a random population of `pool_size` genomes of `genome_bits`
    /// bits, scores and sorts it, and records generation 0.
    ///
    /// The generator is seeded from `params.seed`, or from the OS when unset.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`](crate::GaError::InvalidConfig) when
    /// `pool_size` or `genome_bits` is zero, `elite_count` exceeds
    /// `pool_size`, or a rate lies outside `[0, 1]`.
    pub fn init(
        pool_size: usize,
        genome_bits: usize,
        fitness_fn: F,
        params: GaParams,
    ) -> Result<Self> {
        params.validate(pool_size, genome_bits)?;
        let seed = params.seed.unwrap_or_else(random_seed);
        log::debug!("seeding GA random source with {seed}");
        Self::init_with_rng(pool_size, genome_bits, fitness_fn, params, create_rng(seed))
    }
}

impl<F: FitnessFunction, R: Rng> GaEngine<F, R> {
    /// Like [`init`](GaEngine::init), drawing from a caller-supplied
    /// generator instead. `params.seed` is ignored.
    pub fn init_with_rng(
        pool_size: usize,
        genome_bits: usize,
        fitness_fn: F,
        params: GaParams,
        mut rng: R,
    ) -> Result<Self> {
        params.validate(pool_size, genome_bits)?;

        let genome_bytes = Genome::bytes_for_bits(genome_bits);
        let population = (0..pool_size)
            .map(|_| Individual::new(Genome::random(genome_bytes, &mut rng)))
            .collect();

        let mut engine = Self {
            population,
            params,
            generation: 0,
            pool_size,
            genome_bits,
            fitness_fn,
            rng,
            best_history: Vec::new(),
            average_history: Vec::new(),
        };
        engine.measure_and_sort();
        engine.record_stats();

        log::info!(
            "GA initialized: pool_size={pool_size}, genome_bits={genome_bits}, best={:.3}, avg={:.3}",
            engine.best().fitness(),
            engine.average_fitness()
        );
        Ok(engine)
    }

    /// Re-scores every individual and sorts by descending fitness.
    ///
    /// The sort is stable: equal-fitness individuals keep their prior
    /// relative order.
    pub fn measure_and_sort(&mut self) {
        for ind in &mut self.population {
            ind.score(&self.fitness_fn);
        }
        self.population
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    }

    /// Advances the population by exactly one generation.
    ///
    /// # Errors
    /// [`GaError::InvariantViolation`](crate::GaError::InvariantViolation)
    /// when no distinct second parent can be drawn, which happens only for a
    /// single-individual pool without elitism. The current population is
    /// left untouched in that case.
    pub fn evolve(&mut self) -> Result<()> {
        let target = self.pool_size;
        let mut next_gen: Vec<Individual> = Vec::with_capacity(target);

        // Per-generation marker: already placed into next_gen.
        let mut selected = vec![false; self.population.len()];

        for (i, elite) in self
            .population
            .iter()
            .take(self.params.elite_count)
            .enumerate()
        {
            next_gen.push(elite.clone());
            selected[i] = true;
        }

        let wheel = RouletteWheel::new(&self.population);
        let stall_limit = STALL_DRAWS_PER_INDIVIDUAL * target;
        let mut stalled = 0usize;
        let mut crossovers = 0usize;
        let mut clones = 0usize;

        while next_gen.len() < target {
            let (p1, p2) = wheel.select_pair(&mut self.rng)?;

            if self.rng.random::<f64>() <= self.params.crossover_rate {
                let (c1, c2) = single_point_crossover(
                    self.population[p1].genome(),
                    self.population[p2].genome(),
                    &mut self.rng,
                );
                next_gen.push(Individual::new(c1));
                if next_gen.len() < target {
                    next_gen.push(Individual::new(c2));
                }
                crossovers += 1;
                stalled = 0;
                continue;
            }

            let before = next_gen.len();
            for p in [p1, p2] {
                if next_gen.len() < target && !selected[p] {
                    next_gen.push(self.population[p].clone());
                    selected[p] = true;
                    clones += 1;
                }
            }

            if next_gen.len() > before {
                stalled = 0;
                continue;
            }
            stalled += 1;
            if stalled >= stall_limit {
                log::warn!(
                    "generation {}: clone draws stalled after {stalled} attempts; \
                     filling {} slots in rank order",
                    self.generation + 1,
                    target - next_gen.len()
                );
                for (i, ind) in self.population.iter().enumerate() {
                    if next_gen.len() >= target {
                        break;
                    }
                    if !selected[i] {
                        next_gen.push(ind.clone());
                        selected[i] = true;
                        clones += 1;
                    }
                }
            }
        }

        let rate = self.params.mutation_rate;
        let mut mutated_bits = 0usize;
        for ind in &mut next_gen {
            mutated_bits += bit_flip_mutation(ind.genome_mut(), rate, &mut self.rng);
        }

        self.population = next_gen;
        self.measure_and_sort();
        self.generation += 1;
        self.record_stats();

        log::debug!(
            "generation {}: best={:.3}, avg={:.3}, crossovers={crossovers}, clones={clones}, mutated_bits={mutated_bits}",
            self.generation,
            self.best().fitness(),
            self.average_fitness()
        );
        Ok(())
    }

    /// Runs `n` generations, stopping at the first error.
    pub fn evolve_generations(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.evolve()?;
        }
        Ok(())
    }

    /// Evolves until `done` holds or `max_generations` have run.
    ///
    /// `done` is checked before every generation, including the first.
    /// Returns the number of generations run by this call.
    pub fn run_until<P>(&mut self, max_generations: usize, mut done: P) -> Result<usize>
    where
        P: FnMut(&Self) -> bool,
    {
        let mut ran = 0;
        while ran < max_generations && !done(self) {
            self.evolve()?;
            ran += 1;
        }
        Ok(ran)
    }

    fn record_stats(&mut self) {
        let best = self.best().fitness();
        let avg = self.average_fitness();
        self.best_history.push(best);
        self.average_history.push(avg);
    }
}

impl<F, R> GaEngine<F, R> {
    /// Number of completed `evolve` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current population, sorted by descending fitness.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// The top-ranked individual.
    pub fn best(&self) -> &Individual {
        &self.population[0]
    }

    /// Mean fitness of the current population.
    pub fn average_fitness(&self) -> f64 {
        let total: f64 = self.population.iter().map(Individual::fitness).sum();
        total / self.population.len() as f64
    }

    /// Best fitness per generation, starting with generation 0.
    pub fn best_history(&self) -> &[f64] {
        &self.best_history
    }

    /// Average fitness per generation, starting with generation 0.
    pub fn average_history(&self) -> &[f64] {
        &self.average_history
    }

    /// Per-generation statistics, oldest first.
    pub fn stats(&self) -> impl Iterator<Item = GenerationStats> + '_ {
        self.best_history
            .iter()
            .zip(&self.average_history)
            .enumerate()
            .map(|(generation, (&best_fitness, &average_fitness))| GenerationStats {
                generation,
                best_fitness,
                average_fitness,
            })
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Configured genome length in bits.
    pub fn genome_bits(&self) -> usize {
        self.genome_bits
    }

    /// Genome length in bytes, `ceil(genome_bits / 8)`.
    pub fn genome_bytes(&self) -> usize {
        Genome::bytes_for_bits(self.genome_bits)
    }
}

// ============================================================================
// Tests
// ============================================================================
