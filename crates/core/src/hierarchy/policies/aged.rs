//! Aged-Counter Replacement Policy.
//!
//! Evicts the occupied slot with the strictly greatest age, breaking ties
//! toward the lowest slot index. Ages are advanced by the level on every
//! hit within the set — the hit line ages along with its neighbors — and
//! reset to zero on admission, so this is a counter-based recency
//! approximation rather than textbook LRU: relative order among co-resident
//! lines is preserved, never reset by an access.
//!
//! This behavior is the simulator's compatibility contract and must not be
//! "corrected" to classical LRU.

use super::ReplacementPolicy;
use crate::hierarchy::level::CacheLine;

/// Aged policy state. Victim selection is derived entirely from the slot
/// ages, so there is nothing to track between calls.
#[derive(Debug, Default)]
pub struct AgedPolicy;

impl AgedPolicy {
    /// Creates a new aged policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for AgedPolicy {
    /// Identifies the victim slot to evict.
    ///
    /// Scans the slots in index order and returns the first slot holding
    /// the greatest age.
    fn select_victim(&mut self, lines: &[Option<CacheLine>]) -> usize {
        let mut victim = 0;
        let mut oldest: Option<u64> = None;

        for (idx, slot) in lines.iter().enumerate() {
            if let Some(line) = slot {
                if oldest.map_or(true, |age| line.age > age) {
                    victim = idx;
                    oldest = Some(line.age);
                }
            }
        }

        victim
    }
}
