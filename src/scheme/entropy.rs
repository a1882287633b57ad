//! Sources of the random bits that select sub-pixel patterns

use bitvec::vec::BitVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplier of independent uniform bits
///
/// Share generation draws exactly one bit per source pixel from this trait
/// and nothing else, so a fixed implementation makes outputs exact.
pub trait BitSource {
    /// Draw the next bit
    fn next_bit(&mut self) -> bool;
}

impl<B: BitSource + ?Sized> BitSource for &mut B {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

/// Adapts any `rand` generator into a [`BitSource`]
#[derive(Debug, Clone)]
pub struct RandomBits<R> {
    rng: R,
}

impl<R: Rng> RandomBits<R> {
    /// Wrap a generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> BitSource for RandomBits<R> {
    fn next_bit(&mut self) -> bool {
        self.rng.random::<bool>()
    }
}

/// Replays a fixed bit sequence, starting over when it runs out
///
/// Intended for fixtures that need to know exactly which pattern every
/// pixel receives.
#[derive(Debug, Clone)]
pub struct FixedBits {
    bits: BitVec,
    consumed: usize,
}

impl FixedBits {
    /// Replay the given bits in order
    ///
    /// An empty sequence yields zeros forever.
    pub const fn new(bits: BitVec) -> Self {
        Self { bits, consumed: 0 }
    }

    /// Replay the given booleans in order
    pub fn from_bools(bits: &[bool]) -> Self {
        Self::new(bits.iter().copied().collect())
    }

    /// Source that always yields the same bit
    pub fn constant(bit: bool) -> Self {
        Self::new(BitVec::repeat(bit, 1))
    }

    /// Total number of bits drawn so far
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

impl BitSource for FixedBits {
    fn next_bit(&mut self) -> bool {
        let bit = self
            .bits
            .get(self.consumed.checked_rem(self.bits.len()).unwrap_or(0))
            .is_some_and(|bit| *bit);
        self.consumed += 1;
        bit
    }
}

/// Where a generator's randomness comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropySource {
    /// Deterministic stream, reproducible across runs
    Seeded(u64),
    /// Fresh entropy from the operating system
    Os,
}

impl EntropySource {
    /// Seeded when a seed is given, operating-system entropy otherwise
    pub const fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(seed),
            None => Self::Os,
        }
    }

    /// Build the generator described by this source
    pub fn rng(self) -> StdRng {
        match self {
            Self::Seeded(seed) => StdRng::seed_from_u64(seed),
            Self::Os => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Build a bit source described by this source
    pub fn bits(self) -> RandomBits<StdRng> {
        RandomBits::new(self.rng())
    }
}
