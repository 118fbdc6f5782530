//! Tie-break policies
//!
//! A policy only decides the order in which equally-ranked candidates are
//! considered (actions handed to the frontier, mandatory waypoints). It never
//! sees costs, so it cannot change the cost of the plan that is found.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub trait TieBreak {
    fn arrange<T>(&mut self, items: &mut [T]);
}

/// Keeps the input order
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Stable;

#[cfg(test)]
impl TieBreak for Stable {
    fn arrange<T>(&mut self, _items: &mut [T]) {}
}

/// Reproducible shuffle driven by a seed
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    seed: u64,
    rng: StdRng,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Use `seed` when given, otherwise draw a fresh one
    pub fn from_seed_or_random(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TieBreak for SeededShuffle {
    fn arrange<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
