//! Deterministic RNG for target placement.
//!
//! # Determinism strategy
//!
//! A host owns one `TargetRng` seeded from `GridConfig::seed`.  Independent
//! per-round streams come from [`TargetRng::for_round`], which mixes the round
//! number with the 64-bit fractional golden-ratio constant so consecutive
//! rounds land far apart in seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used by hosts to place targets and pick start cells.
pub struct TargetRng(SmallRng);

impl TargetRng {
    pub fn new(seed: u64) -> Self {
        TargetRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed an independent stream for round `round` of a run seeded `seed`.
    pub fn for_round(seed: u64, round: u64) -> Self {
        TargetRng(SmallRng::seed_from_u64(seed ^ round.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
