//! Cascade unit tests.
//!
//! Verifies the per-access L1→L2→L3→RAM algorithm end to end: early return
//! on hit, eager admission into every missed level, the exact latency sums
//! of the built-in table (1, 11, 111, 1111), and the cumulative cycle
//! bookkeeping. Property tests cover monotonicity and the per-level frame
//! uniqueness invariant over arbitrary address streams.

use std::collections::HashSet;

use cachesim_core::hierarchy::level::CacheLevel;
use cachesim_core::{Hierarchy, ServedBy};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{default_hierarchy, frames, small_hierarchy};

/// Returns the level of a hierarchy by identity.
fn level_of(hierarchy: &Hierarchy, which: ServedBy) -> &CacheLevel {
    hierarchy
        .cache_levels()
        .find(|(tag, _)| *tag == which)
        .map(|(_, lvl)| lvl)
        .unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Latency paths
// ══════════════════════════════════════════════════════════

/// A cold access walks the whole cascade and is served by RAM:
/// 1 + 10 + 100 + 1000 cycles.
#[test]
fn cold_access_reaches_ram() {
    let mut hierarchy = default_hierarchy();
    let access = hierarchy.access(0x1234);

    assert_eq!(access.served_by, ServedBy::Ram);
    assert_eq!(access.frame, None);
    assert_eq!(access.cycles, 1111);
}

/// An L1 hit charges only the L1 latency and stops the cascade.
#[test]
fn l1_hit_charges_one_cycle() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x1234);

    let access = hierarchy.access(0x1234);
    assert_eq!(access.served_by, ServedBy::L1);
    assert_eq!(access.frame, Some(0x1234 / 256));
    assert_eq!(access.cycles, 1);
}

/// An access that misses L1 but shares an L2 frame with an earlier access
/// is served by L2 for 1 + 10 cycles.
#[test]
fn l2_hit_charges_eleven_cycles() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x000);

    // 0x100 is L1 frame 1 (miss) but still L2 frame 0 (hit).
    let access = hierarchy.access(0x100);
    assert_eq!(access.served_by, ServedBy::L2);
    assert_eq!(access.frame, Some(0));
    assert_eq!(access.cycles, 11);
}

/// An access that misses L1 and L2 but shares an L3 frame is served by L3
/// for 1 + 10 + 100 cycles.
#[test]
fn l3_hit_charges_one_hundred_eleven_cycles() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x000);

    // 2048 is L1 frame 8 and L2 frame 2 (both miss), L3 frame 0 (hit).
    let access = hierarchy.access(0x800);
    assert_eq!(access.served_by, ServedBy::L3);
    assert_eq!(access.frame, Some(0));
    assert_eq!(access.cycles, 111);
}

// ══════════════════════════════════════════════════════════
// 2. Eager admission
// ══════════════════════════════════════════════════════════

/// A RAM-satisfied access leaves the frame resident in all three cache
/// levels at once.
#[test]
fn ram_access_populates_every_level() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x2000);

    assert_eq!(frames(level_of(&hierarchy, ServedBy::L1)), vec![0x2000 / 256]);
    assert_eq!(
        frames(level_of(&hierarchy, ServedBy::L2)),
        vec![0x2000 / 1024]
    );
    assert_eq!(
        frames(level_of(&hierarchy, ServedBy::L3)),
        vec![0x2000 / 4096]
    );
}

/// An L3 hit still admits the frame into L1 and L2 on the way down, even
/// though the returned latency never touched RAM.
#[test]
fn l3_hit_leaves_frame_in_l1_and_l2() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x000);
    let access = hierarchy.access(0x800);
    assert_eq!(access.served_by, ServedBy::L3);

    // Eagerly admitted on the way: L1 frame 8, L2 frame 2.
    assert!(frames(level_of(&hierarchy, ServedBy::L1)).contains(&8));
    assert!(frames(level_of(&hierarchy, ServedBy::L2)).contains(&2));
    // L3 itself hit; its occupancy did not grow.
    assert_eq!(frames(level_of(&hierarchy, ServedBy::L3)), vec![0]);
}

/// A hit causes no insertion anywhere: deeper levels are not even probed.
#[test]
fn l1_hit_leaves_deeper_levels_untouched() {
    let mut hierarchy = default_hierarchy();
    hierarchy.access(0x000);

    // Same L1 frame, different byte offset.
    let access = hierarchy.access(0x040);
    assert_eq!(access.served_by, ServedBy::L1);

    assert_eq!(level_of(&hierarchy, ServedBy::L2).occupied().count(), 1);
    assert_eq!(level_of(&hierarchy, ServedBy::L3).occupied().count(), 1);
}

// ══════════════════════════════════════════════════════════
// 3. Hit stability and eviction
// ══════════════════════════════════════════════════════════

/// Repeating one address hits L1 on every access after the first.
#[test]
fn repeated_address_pins_to_l1() {
    let mut hierarchy = default_hierarchy();
    assert_eq!(hierarchy.access(0xbeef).cycles, 1111);

    for _ in 0..10 {
        let access = hierarchy.access(0xbeef);
        assert_eq!(access.served_by, ServedBy::L1);
        assert_eq!(access.cycles, 1);
    }
    assert_eq!(hierarchy.cumulative_cycles(), 1111 + 10);
}

/// Five distinct L1 frames against a 4-way L1: the fifth access evicts the
/// tied-oldest resident in the lowest slot — frame 0.
///
/// Full trace against the built-in table: the first access walks to RAM
/// (1111); 0x100..0x300 miss L1 but share L2 frame 0 (11 each); 0x400
/// misses L1 and L2 but shares L3 frame 0 (111).
#[test]
fn fifth_distinct_l1_frame_evicts_frame_zero() {
    let mut hierarchy = default_hierarchy();

    assert_eq!(hierarchy.access(0x000).cycles, 1111);
    assert_eq!(hierarchy.access(0x100).cycles, 11);
    assert_eq!(hierarchy.access(0x200).cycles, 11);
    assert_eq!(hierarchy.access(0x300).cycles, 11);
    assert_eq!(hierarchy.access(0x400).cycles, 111);

    // Frame 0 lost the all-tied age race by holding the lowest slot.
    let l1 = frames(level_of(&hierarchy, ServedBy::L1));
    assert_eq!(l1, vec![4, 1, 2, 3]);
    assert_eq!(hierarchy.cumulative_cycles(), 1111 + 11 + 11 + 11 + 111);
}

// ══════════════════════════════════════════════════════════
// 4. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    /// The cumulative counter is exactly the sum of per-access results,
    /// and every default-table access costs 1, 11, 111, or 1111 cycles.
    #[test]
    fn cumulative_cycles_is_sum_of_accesses(addrs in proptest::collection::vec(any::<u32>(), 0..200)) {
        let mut hierarchy = default_hierarchy();
        let mut sum = 0u64;
        let mut previous = 0u64;

        for addr in addrs {
            let access = hierarchy.access(addr);
            prop_assert!(matches!(access.cycles, 1 | 11 | 111 | 1111));
            sum += access.cycles;
            prop_assert!(hierarchy.cumulative_cycles() >= previous);
            previous = hierarchy.cumulative_cycles();
        }

        prop_assert_eq!(hierarchy.cumulative_cycles(), sum);
    }

    /// No level ever holds two occupied lines with the same frame, for any
    /// address stream (exercised on the small hierarchy so evictions are
    /// frequent).
    #[test]
    fn no_level_holds_duplicate_frames(addrs in proptest::collection::vec(any::<u32>(), 0..300)) {
        let mut hierarchy = small_hierarchy();
        for addr in addrs {
            hierarchy.access(addr);

            for (_, lvl) in hierarchy.cache_levels() {
                let occupied = frames(lvl);
                let unique: HashSet<u32> = occupied.iter().copied().collect();
                prop_assert_eq!(unique.len(), occupied.len());
            }
        }
    }

    /// Ages exist exactly on occupied slots and occupancy never shrinks.
    #[test]
    fn occupancy_is_monotone(addrs in proptest::collection::vec(any::<u32>(), 1..300)) {
        let mut hierarchy = small_hierarchy();
        let mut last_counts = [0usize; 3];

        for addr in addrs {
            hierarchy.access(addr);
            for (idx, (_, lvl)) in hierarchy.cache_levels().enumerate() {
                let count = lvl.occupied().count();
                prop_assert!(count >= last_counts[idx]);
                prop_assert!(count <= lvl.ways());
                last_counts[idx] = count;
            }
        }
    }
}
