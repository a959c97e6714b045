//! Cache replacement policies.
//!
//! Implements victim selection for a full, fully-associative cache level.
//!
//! # Policies
//!
//! - `Aged`: greatest age wins, ties to the lowest slot index (default).
//! - `RoundRobin`: rotating pointer over slot indices.
//! - `Random`: xorshift-based pseudo-random selection.

/// Aged-counter replacement policy (the compatibility default).
pub mod aged;

/// Round-robin (FIFO) replacement policy.
pub mod round_robin;

/// Random replacement policy.
pub mod random;

pub use aged::AgedPolicy;
pub use random::RandomPolicy;
pub use round_robin::RoundRobinPolicy;

use crate::config::ReplacementPolicyKind;
use crate::hierarchy::level::CacheLine;

/// Trait for cache replacement policies.
///
/// A policy is consulted only when every slot of a level is occupied and a
/// new frame must be admitted. It observes the current slot states and
/// names the victim; the level itself performs the overwrite and the age
/// bookkeeping, which are fixed contracts independent of the policy.
pub trait ReplacementPolicy: std::fmt::Debug {
    /// Selects a victim slot to evict.
    ///
    /// # Arguments
    ///
    /// * `lines` - The level's slots in index order. Every slot is occupied
    ///   when this is called.
    ///
    /// # Returns
    ///
    /// The index of the slot to overwrite.
    fn select_victim(&mut self, lines: &[Option<CacheLine>]) -> usize;
}

/// Builds the boxed policy implementation for a configured kind.
///
/// # Arguments
///
/// * `kind` - The configured policy variant.
/// * `ways` - The level's slot count (used by stateful policies).
pub fn for_kind(
    kind: ReplacementPolicyKind,
    ways: usize,
) -> Box<dyn ReplacementPolicy + Send + Sync> {
    match kind {
        ReplacementPolicyKind::Aged => Box::new(AgedPolicy::new()),
        ReplacementPolicyKind::RoundRobin => Box::new(RoundRobinPolicy::new(ways)),
        ReplacementPolicyKind::Random => Box::new(RandomPolicy::new(ways)),
    }
}
