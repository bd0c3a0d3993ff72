//! Bit-string genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: one bit-granular cut point, tails swapped
//! - [`crossover_at`]: the same split at an explicit bit position
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: independent per-bit flips at a fixed rate

use super::genome::Genome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at a uniformly drawn bit in `[0, 8 * len)`.
///
/// # Panics
/// Panics if the parents differ in length or are empty.
pub fn single_point_crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(!parent1.is_empty(), "parents must not be empty");

    let crossover_bit = rng.random_range(0..parent1.bit_len());
    log::trace!("crossover at bit {crossover_bit}");

    let (c1, c2) = crossover_at(parent1.as_bytes(), parent2.as_bytes(), crossover_bit);
    (Genome::from_bytes(c1), Genome::from_bytes(c2))
}

/// Splits two parents at `crossover_bit` and returns both children.
///
/// Let `byte = crossover_bit / 8` and `k = crossover_bit % 8`:
///
/// - bytes before `byte` are copied: child1 from parent1, child2 from parent2
/// - bytes after `byte` are swapped: child1 from parent2, child2 from parent1
/// - at `byte`, with `mask` holding the low `8 - k` bits,
///   `child1 = (p1 & mask) | (p2 & !mask)` and
///   `child2 = (p2 & mask) | (p1 & !mask)`
///
/// ```
/// use bitga::ga::operators::crossover_at;
///
/// let (c1, c2) = crossover_at(&[0xFF], &[0x00], 3);
/// assert_eq!(c1, vec![0x1F]);
/// assert_eq!(c2, vec![0xE0]);
/// ```
///
/// # Panics
/// Panics if the parents differ in length or `crossover_bit >= 8 * len`.
pub fn crossover_at(parent1: &[u8], parent2: &[u8], crossover_bit: usize) -> (Vec<u8>, Vec<u8>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        crossover_bit < n * 8,
        "crossover bit {crossover_bit} out of range for {n}-byte genome"
    );

    let crossover_byte = crossover_bit / 8;
    let k = crossover_bit % 8;
    let mask = ((1u16 << (8 - k)) - 1) as u8;

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);

    for (i, (&a, &b)) in parent1.iter().zip(parent2).enumerate() {
        let (x, y) = match i.cmp(&crossover_byte) {
            std::cmp::Ordering::Less => (a, b),
            std::cmp::Ordering::Greater => (b, a),
            std::cmp::Ordering::Equal => ((a & mask) | (b & !mask), (b & mask) | (a & !mask)),
        };
        child1.push(x);
        child2.push(y);
    }

    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with probability `rate`.
///
/// Bits are visited MSB first within each byte, bytes in genome order, and
/// one uniform sample is drawn per bit whatever the rate. Returns the
/// number of bits flipped.
pub fn bit_flip_mutation<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for byte in genome.bytes_mut() {
        let mut mask = 0x80u8;
        while mask != 0 {
            if rng.random::<f64>() < rate {
                *byte ^= mask;
                flipped += 1;
            }
            mask >>= 1;
        }
    }
    flipped
}

// ============================================================================
// Tests
// ============================================================================
