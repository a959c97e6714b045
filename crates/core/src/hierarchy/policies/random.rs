//! Random Replacement Policy.
//!
//! Evicts a pseudo-randomly chosen slot. Uses a simple xorshift generator
//! with a fixed seed, keeping victim sequences deterministic across runs
//! without pulling in an RNG dependency.

use super::ReplacementPolicy;
use crate::hierarchy::level::CacheLine;

/// Random policy state.
#[derive(Debug)]
pub struct RandomPolicy {
    /// Number of slots in the level.
    ways: usize,
    /// Internal xorshift generator state.
    state: u64,
}

impl RandomPolicy {
    /// Creates a new random policy instance.
    ///
    /// # Arguments
    ///
    /// * `ways` - The level's slot count.
    pub fn new(ways: usize) -> Self {
        Self {
            ways,
            state: 0x9e37_79b9_7f4a_7c15,
        }
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Generates the next pseudo-random number and maps it to a slot index.
    fn select_victim(&mut self, _lines: &[Option<CacheLine>]) -> usize {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x as usize) % self.ways
    }
}
