//! Bounded random noise added to leaf evaluations.
//!
//! The noise keeps the engine from replaying the same game. It also means a
//! leaf may score differently each time it is visited, so pruning decisions
//! are only as stable as the noise; pass a seed (or a zero bound) where
//! reproducible results matter.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform integer noise in `[-bound, bound]`.
#[derive(Debug, Clone)]
pub struct Jitter<G = SmallRng> {
    rng: G,
    bound: i32,
}

impl Jitter<SmallRng> {
    /// Seeded noise is reproducible; without a seed the generator is seeded
    /// from the OS.
    pub fn new(bound: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(bound, rng)
    }
}

impl<G: Rng> Jitter<G> {
    /// Negative bounds are treated as zero.
    pub fn with_rng(bound: i32, rng: G) -> Self {
        Self {
            rng,
            bound: bound.max(0),
        }
    }

    pub fn bound(&self) -> i32 {
        self.bound
    }

    pub fn sample(&mut self) -> i32 {
        if self.bound == 0 {
            return 0;
        }
        self.rng.gen_range(-self.bound..=self.bound)
    }
}
