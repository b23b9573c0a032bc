//! Random draws used by the spawn policy.
//!
//! Spawning only needs two kinds of draw, so they sit behind a small trait.
//! The engine runs on a seeded ChaCha stream; tests can script exact values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of spawn randomness.
pub trait SpawnSource {
    /// Uniform real in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// Uniform integer in `[lo, hi]`, both ends included.
    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> SpawnSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn int_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.gen_range(lo..=hi)
    }
}

/// The engine's default source.
pub type DefaultSource = RngSource<ChaCha8Rng>;

impl DefaultSource {
    pub fn seeded(seed: u64) -> Self {
        RngSource(ChaCha8Rng::seed_from_u64(seed))
    }
}
