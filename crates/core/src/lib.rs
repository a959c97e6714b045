//! Multi-level cache hierarchy simulation library.
//!
//! This crate implements the engine behind the `cachesim` tool: a register
//! issuing load requests against three levels of fully-associative cache
//! (L1, L2, L3) backed by RAM, with per-level line sizes and access
//! latencies. It provides:
//! 1. **Hierarchy:** Per-access L1→L2→L3→RAM cascade with eager admission
//!    on every missed level and early return on hit.
//! 2. **Levels:** Fixed-capacity, fully-associative slot arrays with an
//!    explicit empty/occupied representation (no sentinel values).
//! 3. **Policies:** Pluggable victim selection (aged counter, round-robin,
//!    random) with the aged policy as the compatibility default.
//! 4. **Configuration:** Defaults matching the classic L1/L2/L3/RAM table,
//!    overridable from JSON.
//! 5. **Statistics:** Access, hit/miss, and cycle accounting per level.
//!
//! The engine is infallible by construction: every 32-bit address maps to a
//! valid frame at every level, so [`Hierarchy::access`] never fails. Input
//! validation (hex parsing, config files) is the caller's job and is served
//! by [`addr::parse_address`] and [`Error`].

/// Hexadecimal load-address parsing.
pub mod addr;
/// Hierarchy configuration (defaults, per-level parameters, policy choice).
pub mod config;
/// Error type for the input-validation surface.
pub mod error;
/// The cache hierarchy engine (levels, policies, cascade).
pub mod hierarchy;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `HierarchyConfig::default()` or deserialize
/// from JSON.
pub use crate::config::HierarchyConfig;
/// Crate error type (malformed addresses, config problems).
pub use crate::error::Error;
/// The simulator itself; construct with `Hierarchy::new`.
pub use crate::hierarchy::{Access, Hierarchy, ServedBy};
