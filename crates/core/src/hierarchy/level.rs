//! One fully-associative cache level.
//!
//! A level is a fixed array of slots, each either empty or holding a frame
//! identifier and an age counter. Occupancy is explicit (`Option`) rather
//! than encoded with sentinel tag/age values, so a slot cannot be
//! half-occupied and the age exists exactly when the frame does.

use tracing::trace;

use crate::config::LevelConfig;
use crate::hierarchy::policies::{self, ReplacementPolicy};

/// An occupied cache line: which memory frame is resident and how old it is.
///
/// The age starts at zero on admission and increases by one on every hit
/// anywhere in the same level, the hit line included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLine {
    /// Resident frame identifier (`addr / line_bytes` for this level).
    pub frame: u32,
    /// Recency counter; larger means a better eviction candidate.
    pub age: u64,
}

/// A fixed-capacity, fully-associative cache level.
///
/// Slot index order is stable and significant only as scan and tie-break
/// order. Once a slot has been filled it is only ever overwritten, never
/// cleared back to empty.
pub struct CacheLevel {
    line_bytes: u32,
    latency: u64,
    lines: Vec<Option<CacheLine>>,
    policy: Box<dyn ReplacementPolicy + Send + Sync>,
}

impl CacheLevel {
    /// Creates an empty cache level from its configuration.
    ///
    /// Zero line sizes or capacities from a hand-written config are clamped
    /// to 1 so frame arithmetic and slot scans stay well defined.
    pub fn new(config: &LevelConfig) -> Self {
        let line_bytes = config.line_bytes.max(1);
        let ways = config.ways.max(1);
        Self {
            line_bytes,
            latency: config.latency,
            lines: vec![None; ways],
            policy: policies::for_kind(config.policy, ways),
        }
    }

    /// Computes this level's frame number for a load address.
    pub fn frame_of(&self, addr: u32) -> u32 {
        addr / self.line_bytes
    }

    /// Probes the level for a frame.
    ///
    /// Scans every slot in index order and returns the index of the first
    /// slot holding `frame`, or `None` on a miss. Pure: no slot state is
    /// touched by a probe alone.
    pub fn probe(&self, frame: u32) -> Option<usize> {
        self.lines
            .iter()
            .position(|slot| slot.map_or(false, |line| line.frame == frame))
    }

    /// Ages every occupied line by one, the hit line included.
    ///
    /// Called exactly once per hit in this level. Co-resident lines keep
    /// their relative order; a hit is not rewarded with an age reset.
    pub fn record_hit(&mut self) {
        for slot in self.lines.iter_mut().flatten() {
            slot.age += 1;
        }
    }

    /// Admits a frame into this level following a miss.
    ///
    /// Fills the first empty slot if one exists; otherwise asks the
    /// replacement policy for a victim and overwrites it. The admitted
    /// line's age starts at zero either way.
    ///
    /// # Returns
    ///
    /// The evicted frame, if admission displaced an occupied line.
    pub fn admit(&mut self, frame: u32) -> Option<u32> {
        let admitted = CacheLine { frame, age: 0 };

        if let Some(idx) = self.lines.iter().position(Option::is_none) {
            self.lines[idx] = Some(admitted);
            trace!(frame, slot = idx, "admitted into empty slot");
            return None;
        }

        let victim = self.policy.select_victim(&self.lines);
        let evicted = self.lines[victim].map(|line| line.frame);
        self.lines[victim] = Some(admitted);
        trace!(frame, slot = victim, ?evicted, "admitted by eviction");
        evicted
    }

    /// Iterates over the occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &CacheLine)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|line| (idx, line)))
    }

    /// This level's line size in bytes.
    pub fn line_bytes(&self) -> u32 {
        self.line_bytes
    }

    /// This level's slot count.
    pub fn ways(&self) -> usize {
        self.lines.len()
    }

    /// Fixed probe cost in cycles.
    pub fn latency(&self) -> u64 {
        self.latency
    }
}

impl std::fmt::Debug for CacheLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheLevel")
            .field("line_bytes", &self.line_bytes)
            .field("ways", &self.lines.len())
            .field("latency", &self.latency)
            .field("occupied", &self.occupied().count())
            .finish_non_exhaustive()
    }
}
