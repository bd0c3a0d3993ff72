//! Bit-packed genome representation.
//!
//! Bits are numbered most-significant first within each byte, bytes in
//! genome order: bit 0 is the `0x80` bit of byte 0, bit 9 is the `0x40`
//! bit of byte 1.

use rand::Rng;
use std::fmt;

/// A fixed-length, bit-packed candidate solution.
///
/// The byte length is fixed when the genome is created and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome {
    bytes: Vec<u8>,
}

impl Genome {
    /// Number of bytes needed to hold `bits` bits.
    pub fn bytes_for_bits(bits: usize) -> usize {
        bits.div_ceil(8)
    }

    /// Creates a genome of `n_bytes` independently uniform random bytes.
    pub fn random<R: Rng>(n_bytes: usize, rng: &mut R) -> Self {
        Self {
            bytes: (0..n_bytes).map(|_| rng.random::<u8>()).collect(),
        }
    }

    /// Wraps existing bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of addressable bits (`8 * len()`).
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Returns bit `index` (MSB-first numbering).
    ///
    /// # Panics
    /// Panics if `index >= bit_len()`.
    pub fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & bit_mask(index) != 0
    }

    /// Flips bit `index` (MSB-first numbering).
    ///
    /// # Panics
    /// Panics if `index >= bit_len()`.
    pub fn flip_bit(&mut self, index: usize) {
        self.bytes[index / 8] ^= bit_mask(index);
    }

    /// Number of set bits across the whole genome.
    pub fn count_ones(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Renders the genome as `'0'`/`'1'` characters, MSB first per byte.
    ///
    /// ```
    /// use bitga::ga::Genome;
    ///
    /// let g = Genome::from_bytes(vec![0xA0, 0x01]);
    /// assert_eq!(g.bit_string(), "1010000000000001");
    /// ```
    pub fn bit_string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.bytes {
            write!(f, "{byte:08b}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Genome {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[inline]
fn bit_mask(index: usize) -> u8 {
    0x80 >> (index % 8)
}
