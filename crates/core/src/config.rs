//! Configuration for the simulated memory hierarchy.
//!
//! This module defines the configuration structures for the cache hierarchy.
//! It provides:
//! 1. **Defaults:** The fixed L1/L2/L3/RAM parameter table the simulator
//!    ships with.
//! 2. **Structures:** Per-level and whole-hierarchy configuration.
//! 3. **Enums:** Replacement policy selection.
//!
//! Configuration is supplied as JSON (via the CLI `--config` flag) or use
//! `HierarchyConfig::default()` for the built-in table.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline hierarchy when no configuration file is
/// supplied.
mod defaults {
    /// L1 line size in bytes.
    pub const L1_LINE_BYTES: u32 = 256;
    /// L1 capacity in fully-associative slots.
    pub const L1_WAYS: usize = 4;
    /// L1 access latency in cycles.
    pub const L1_LATENCY: u64 = 1;

    /// L2 line size in bytes.
    pub const L2_LINE_BYTES: u32 = 1024;
    /// L2 capacity in fully-associative slots.
    pub const L2_WAYS: usize = 64;
    /// L2 access latency in cycles.
    pub const L2_LATENCY: u64 = 10;

    /// L3 line size in bytes.
    pub const L3_LINE_BYTES: u32 = 4096;
    /// L3 capacity in fully-associative slots.
    pub const L3_WAYS: usize = 256;
    /// L3 access latency in cycles.
    pub const L3_LATENCY: u64 = 100;

    /// RAM access latency in cycles. RAM has no occupancy state; it always
    /// supplies the data.
    pub const RAM_LATENCY: u64 = 1000;
}

/// Victim-selection algorithms available to a cache level.
///
/// Selects which occupied slot to overwrite when a level is full and must
/// admit a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReplacementPolicyKind {
    /// Counter-based recency approximation: evict the occupied slot with
    /// the strictly greatest age, ties broken by lowest slot index.
    ///
    /// Ages advance on every hit within the level (the hit line included)
    /// and reset to zero on admission. This deliberately diverges from
    /// textbook LRU and is the compatibility default.
    #[default]
    #[serde(alias = "AGED")]
    Aged,
    /// Rotating-pointer eviction (FIFO over slot indices).
    #[serde(alias = "FIFO")]
    RoundRobin,
    /// Pseudo-random eviction via a deterministic xorshift generator.
    #[serde(alias = "RANDOM")]
    Random,
}

/// Parameters of one cache level.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    /// Line size in bytes; defines frame granularity (`addr / line_bytes`).
    pub line_bytes: u32,
    /// Number of fully-associative slots (one set, `ways` lines).
    pub ways: usize,
    /// Fixed cost in cycles charged whenever this level is probed,
    /// independent of the hit/miss outcome.
    pub latency: u64,
    /// Victim-selection policy used when the level is full.
    #[serde(default)]
    pub policy: ReplacementPolicyKind,
}

/// Parameters of backing RAM.
#[derive(Debug, Clone, Deserialize)]
pub struct RamConfig {
    /// Access latency in cycles.
    #[serde(default = "RamConfig::default_latency")]
    pub latency: u64,
}

impl RamConfig {
    /// Returns the default RAM latency.
    fn default_latency() -> u64 {
        defaults::RAM_LATENCY
    }
}

impl Default for RamConfig {
    fn default() -> Self {
        Self {
            latency: defaults::RAM_LATENCY,
        }
    }
}

/// Root configuration for the whole hierarchy.
///
/// # Examples
///
/// Creating the built-in configuration:
///
/// ```
/// use cachesim_core::config::HierarchyConfig;
///
/// let config = HierarchyConfig::default();
/// assert_eq!(config.l1.line_bytes, 256);
/// assert_eq!(config.l3.ways, 256);
/// assert_eq!(config.ram.latency, 1000);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// First-level cache parameters.
    #[serde(default = "HierarchyConfig::default_l1")]
    pub l1: LevelConfig,
    /// Second-level cache parameters.
    #[serde(default = "HierarchyConfig::default_l2")]
    pub l2: LevelConfig,
    /// Third-level cache parameters.
    #[serde(default = "HierarchyConfig::default_l3")]
    pub l3: LevelConfig,
    /// Backing RAM parameters.
    #[serde(default)]
    pub ram: RamConfig,
}

impl HierarchyConfig {
    /// Returns the default L1 parameters (256 B lines, 4 ways, 1 cycle).
    fn default_l1() -> LevelConfig {
        LevelConfig {
            line_bytes: defaults::L1_LINE_BYTES,
            ways: defaults::L1_WAYS,
            latency: defaults::L1_LATENCY,
            policy: ReplacementPolicyKind::default(),
        }
    }

    /// Returns the default L2 parameters (1024 B lines, 64 ways, 10 cycles).
    fn default_l2() -> LevelConfig {
        LevelConfig {
            line_bytes: defaults::L2_LINE_BYTES,
            ways: defaults::L2_WAYS,
            latency: defaults::L2_LATENCY,
            policy: ReplacementPolicyKind::default(),
        }
    }

    /// Returns the default L3 parameters (4096 B lines, 256 ways, 100 cycles).
    fn default_l3() -> LevelConfig {
        LevelConfig {
            line_bytes: defaults::L3_LINE_BYTES,
            ways: defaults::L3_WAYS,
            latency: defaults::L3_LATENCY,
            policy: ReplacementPolicyKind::default(),
        }
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            l1: Self::default_l1(),
            l2: Self::default_l2(),
            l3: Self::default_l3(),
            ram: RamConfig::default(),
        }
    }
}
