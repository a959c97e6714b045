//! The cache hierarchy engine.
//!
//! This module owns the three cache levels and backing RAM and implements
//! the per-access algorithm: a strict single-pass L1→L2→L3→RAM cascade. At
//! each level the frame number is recomputed for that level's line size,
//! the level is probed, and on a miss the frame is eagerly admitted before
//! the cascade continues — every probed-and-missed level receives its own
//! independent admission, not just the level that finally supplies the
//! data. A hit stops the cascade immediately; there is no backward
//! promotion and no level inspects another level's state.

/// Cache level and line data model.
pub mod level;
/// Victim-selection policies.
pub mod policies;

use tracing::debug;

use crate::config::HierarchyConfig;
use crate::stats::SimStats;
use level::CacheLevel;

/// Which component of the hierarchy supplied the data for an access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServedBy {
    /// First-level cache.
    L1,
    /// Second-level cache.
    L2,
    /// Third-level cache.
    L3,
    /// Backing RAM; always supplies the data when all caches miss.
    Ram,
}

impl std::fmt::Display for ServedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L1 => write!(f, "L1"),
            Self::L2 => write!(f, "L2"),
            Self::L3 => write!(f, "L3"),
            Self::Ram => write!(f, "RAM"),
        }
    }
}

/// Outcome of one processed load access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// The component that satisfied the load.
    pub served_by: ServedBy,
    /// The serving level's frame number; `None` when RAM served (RAM has no
    /// frame granularity).
    pub frame: Option<u32>,
    /// Cycles charged: the sum of latencies of every component probed,
    /// the serving one included.
    pub cycles: u64,
}

/// Display order and identity of the cache levels in the cascade.
const CACHE_LEVELS: [ServedBy; 3] = [ServedBy::L1, ServedBy::L2, ServedBy::L3];

/// The hierarchy simulator: three cache levels, a RAM latency, and the
/// running cycle total.
///
/// All mutable simulation state lives here; independent instances can be
/// constructed freely (there is no ambient or static state).
#[derive(Debug)]
pub struct Hierarchy {
    levels: [CacheLevel; 3],
    ram_latency: u64,
    cumulative_cycles: u64,
    stats: SimStats,
}

impl Hierarchy {
    /// Creates a hierarchy with all cache levels empty.
    pub fn new(config: &HierarchyConfig) -> Self {
        Self {
            levels: [
                CacheLevel::new(&config.l1),
                CacheLevel::new(&config.l2),
                CacheLevel::new(&config.l3),
            ],
            ram_latency: config.ram.latency,
            cumulative_cycles: 0,
            stats: SimStats::default(),
        }
    }

    /// Processes one load access and returns its outcome.
    ///
    /// Executes the cascade: per level, compute the frame, charge the
    /// level's latency, probe, and either stop on a hit (after aging every
    /// occupied line in that level) or admit the frame and continue. If all
    /// three levels miss, RAM satisfies the access and its latency is
    /// charged on top.
    ///
    /// Never fails: frame arithmetic and slot scans are bounded for any
    /// 32-bit address. Side effects are confined to the probed levels, the
    /// cumulative cycle counter, and the statistics.
    pub fn access(&mut self, addr: u32) -> Access {
        let mut cycles = 0;

        for (idx, which) in CACHE_LEVELS.iter().enumerate() {
            let lvl = &mut self.levels[idx];
            let frame = lvl.frame_of(addr);
            cycles += lvl.latency();

            if lvl.probe(frame).is_some() {
                lvl.record_hit();
                return self.finish(Access {
                    served_by: *which,
                    frame: Some(frame),
                    cycles,
                });
            }

            // Eager admission: the frame lands here even if a deeper level
            // turns out to hold it.
            let _evicted = lvl.admit(frame);
        }

        cycles += self.ram_latency;
        self.finish(Access {
            served_by: ServedBy::Ram,
            frame: None,
            cycles,
        })
    }

    /// Books an access outcome into the running totals.
    fn finish(&mut self, access: Access) -> Access {
        self.cumulative_cycles += access.cycles;
        self.stats.record(&access);
        debug!(
            served_by = %access.served_by,
            frame = ?access.frame,
            cycles = access.cycles,
            "access complete"
        );
        access
    }

    /// Total cycles across all processed accesses.
    pub fn cumulative_cycles(&self) -> u64 {
        self.cumulative_cycles
    }

    /// Accumulated per-level statistics.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The cache levels in cascade order, with their identities, for
    /// diagnostic dumping and summary printing.
    pub fn cache_levels(&self) -> impl Iterator<Item = (ServedBy, &CacheLevel)> {
        CACHE_LEVELS.iter().copied().zip(self.levels.iter())
    }

    /// RAM access latency in cycles.
    pub fn ram_latency(&self) -> u64 {
        self.ram_latency
    }
}
