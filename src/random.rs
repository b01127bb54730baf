//! Random sources for the rule table's default branch.
//!
//! The default branch is the only nondeterminism in a recommendation.
//! It draws through [`RandomSource`] so callers can pin it: production
//! uses [`ThreadRandom`], tests and reproducible runs use [`SeededRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index uniformly from `0..len`.
pub trait RandomSource: Send {
    /// Uniform index in `0..len`. `len` is always non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator seeded from a `u64`.
///
/// Two sources built from the same seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
