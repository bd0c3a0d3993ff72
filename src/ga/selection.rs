//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! A [`RouletteWheel`] is built once per generation over the population in
//! its sorted order and discarded after the next generation is assembled.
//! Parents are identified by their index into that order, which stays
//! stable for the wheel's lifetime.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::error::{GaError, Result};
use rand::Rng;

/// Cumulative selection distribution over one generation's population.
///
/// Entry `i` holds `sum(fitness[0..=i]) / total_fitness`. When the total
/// fitness is zero (or not finite) the wheel falls back to uniform slots,
/// `(i + 1) / n`.
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    cumulative: Vec<f64>,
    uniform: bool,
}

impl RouletteWheel {
    /// Builds the wheel over `population` in its current order.
    pub fn new(population: &[Individual]) -> Self {
        let fitness: Vec<f64> = population.iter().map(Individual::fitness).collect();
        Self::from_fitness(&fitness)
    }

    /// Builds the wheel from raw fitness values.
    pub fn from_fitness(fitness: &[f64]) -> Self {
        let n = fitness.len();
        let total: f64 = fitness.iter().sum();

        if total == 0.0 || !total.is_finite() {
            if n > 0 {
                log::warn!(
                    "total fitness is {total}; falling back to uniform parent selection"
                );
            }
            let cumulative = (1..=n).map(|i| i as f64 / n as f64).collect();
            return Self {
                cumulative,
                uniform: true,
            };
        }

        let mut acc = 0.0;
        let cumulative = fitness
            .iter()
            .map(|&f| {
                acc += f / total;
                acc
            })
            .collect();

        Self {
            cumulative,
            uniform: false,
        }
    }

    /// The cumulative probability of each slot.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Whether the zero-total-fitness fallback was used.
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Returns the first slot whose cumulative probability is `>= r`.
    ///
    /// Rounding can leave the last entry slightly below `r`; the last slot
    /// is returned in that case. `None` only for an empty wheel.
    pub fn spin(&self, r: f64) -> Option<usize> {
        let last = self.cumulative.len().checked_sub(1)?;
        Some(
            self.cumulative
                .iter()
                .position(|&c| c >= r)
                .unwrap_or(last),
        )
    }

    /// Like [`spin`](Self::spin), but never returns `excluded`.
    ///
    /// The scan passes over `excluded` and continues forward with the same
    /// `r`. If it runs off the end, the last slot other than `excluded` is
    /// returned. `None` when no other slot exists.
    pub fn spin_excluding(&self, r: f64, excluded: usize) -> Option<usize> {
        let hit = self
            .cumulative
            .iter()
            .enumerate()
            .find(|&(i, &c)| i != excluded && c >= r)
            .map(|(i, _)| i);
        if hit.is_some() {
            return hit;
        }
        (0..self.cumulative.len()).rev().find(|&i| i != excluded)
    }

    /// Draws a pair of distinct parent slots.
    ///
    /// Consumes exactly two uniform samples from `rng`: one per parent.
    ///
    /// # Errors
    /// [`GaError::InvariantViolation`] when the wheel holds fewer than two
    /// slots, so no distinct second parent exists.
    pub fn select_pair<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize)> {
        let r1: f64 = rng.random();
        let p1 = self.spin(r1).ok_or_else(|| {
            GaError::InvariantViolation("parent1 not found: empty population".into())
        })?;

        let r2: f64 = rng.random();
        let p2 = self.spin_excluding(r2, p1).ok_or_else(|| {
            GaError::InvariantViolation(format!(
                "parent2 not found: no individual distinct from parent1 among {}",
                self.len()
            ))
        })?;

        Ok((p1, p2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_cumulative_distribution() {
        let wheel = RouletteWheel::from_fitness(&[4.0, 3.0, 2.0, 1.0]);
        let expected = [0.4, 0.7, 0.9, 1.0];
        for (c, e) in wheel.cumulative().iter().zip(expected) {
            assert!((c - e).abs() < 1e-12, "{c} vs {e}");
        }
        assert!(!wheel.is_uniform());
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let wheel = RouletteWheel::from_fitness(&[0.0, 0.0, 0.0, 0.0]);
        assert!(wheel.is_uniform());
        assert_eq!(wheel.cumulative(), &[0.25, 0.5, 0.75, 1.0]);
        assert!(wheel.cumulative().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_spin_first_at_or_above() {
        let wheel = RouletteWheel::from_fitness(&[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(wheel.spin(0.0), Some(0));
        assert_eq!(wheel.spin(0.4), Some(0));
        assert_eq!(wheel.spin(0.41), Some(1));
        assert_eq!(wheel.spin(0.95), Some(3));
    }

    #[test]
    fn test_spin_rounding_tail() {
        let wheel = RouletteWheel {
            cumulative: vec![0.5, 0.999_999],
            uniform: false,
        };
        assert_eq!(wheel.spin(0.999_999_9), Some(1));
    }

    #[test]
    fn test_spin_empty() {
        let wheel = RouletteWheel::from_fitness(&[]);
        assert_eq!(wheel.spin(0.5), None);
    }

    #[test]
    fn test_spin_excluding_skips_forward_without_redraw() {
        let wheel = RouletteWheel::from_fitness(&[4.0, 3.0, 2.0, 1.0]);
        // r = 0.1 hits slot 0; excluding it continues to slot 1.
        assert_eq!(wheel.spin_excluding(0.1, 0), Some(1));
        // r = 0.8 hits slot 2 regardless of an earlier exclusion.
        assert_eq!(wheel.spin_excluding(0.8, 0), Some(2));
        assert_eq!(wheel.spin_excluding(0.8, 2), Some(3));
    }

    #[test]
    fn test_spin_excluding_tail_falls_back_to_previous() {
        let wheel = RouletteWheel::from_fitness(&[4.0, 3.0, 2.0, 1.0]);
        // Only slot 3 satisfies r = 0.95, and it is excluded.
        assert_eq!(wheel.spin_excluding(0.95, 3), Some(2));
    }

    #[test]
    fn test_spin_excluding_single_slot() {
        let wheel = RouletteWheel::from_fitness(&[1.0]);
        assert_eq!(wheel.spin_excluding(0.5, 0), None);
    }

    #[test]
    fn test_select_pair_single_individual_is_invariant_violation() {
        let wheel = RouletteWheel::from_fitness(&[3.0]);
        let mut rng = create_rng(42);
        let err = wheel.select_pair(&mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvariantViolation(_)));
    }

    #[test]
    fn test_select_pair_always_distinct() {
        let wheel = RouletteWheel::from_fitness(&[10.0, 5.0, 5.0, 1.0, 0.0]);
        let mut rng = create_rng(42);
        for _ in 0..10_000 {
            let (p1, p2) = wheel.select_pair(&mut rng).unwrap();
            assert_ne!(p1, p2);
        }
    }

    #[test]
    fn test_select_pair_distinct_with_dominant_individual() {
        // Slot 0 owns the whole wheel; parent2 must still differ.
        let wheel = RouletteWheel::from_fitness(&[1.0, 0.0, 0.0]);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let (p1, p2) = wheel.select_pair(&mut rng).unwrap();
            assert_eq!(p1, 0);
            assert_eq!(p2, 1);
        }
    }

    #[test]
    fn test_roulette_is_fitness_proportionate() {
        let wheel = RouletteWheel::from_fitness(&[60.0, 30.0, 10.0]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 3];
        let n = 20_000;
        for _ in 0..n {
            let r: f64 = rng.random();
            counts[wheel.spin(r).unwrap()] += 1;
        }
        let share = counts[0] as f64 / n as f64;
        assert!((share - 0.6).abs() < 0.02, "share of best = {share}");
        assert!(counts[0] > counts[1] && counts[1] > counts[2]);
    }

    #[test]
    fn test_new_reads_population_order() {
        use crate::ga::Genome;
        let f = |g: &[u8]| g[0] as f64;
        let mut pop: Vec<Individual> = [3u8, 1]
            .iter()
            .map(|&b| Individual::new(Genome::from_bytes(vec![b])))
            .collect();
        for ind in &mut pop {
            ind.score(&f);
        }
        let wheel = RouletteWheel::new(&pop);
        assert!((wheel.cumulative()[0] - 0.75).abs() < 1e-12);
        assert!((wheel.cumulative()[1] - 1.0).abs() < 1e-12);
    }
}
