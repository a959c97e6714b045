//! Round-Robin (FIFO) Replacement Policy.
//!
//! Evicts slots in rotating index order, regardless of age. A single
//! counter advances one slot per eviction and wraps at the level's
//! capacity, so each resident line survives exactly one full rotation once
//! the level is full.

use super::ReplacementPolicy;
use crate::hierarchy::level::CacheLine;

/// Round-robin policy state.
#[derive(Debug)]
pub struct RoundRobinPolicy {
    /// Next slot to be evicted.
    next: usize,
    /// Number of slots in the level.
    ways: usize,
}

impl RoundRobinPolicy {
    /// Creates a new round-robin policy instance.
    ///
    /// # Arguments
    ///
    /// * `ways` - The level's slot count.
    pub fn new(ways: usize) -> Self {
        Self { next: 0, ways }
    }
}

impl ReplacementPolicy for RoundRobinPolicy {
    /// Returns the current rotation pointer and advances it.
    fn select_victim(&mut self, _lines: &[Option<CacheLine>]) -> usize {
        let victim = self.next;
        self.next = (self.next + 1) % self.ways;
        victim
    }
}
