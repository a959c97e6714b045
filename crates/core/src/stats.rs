//! Simulation statistics collection and reporting.
//!
//! Tracks per-level hit/miss counts and cycle totals across a simulation
//! session. An access served by L2 counts as an L1 miss and an L2 hit; an
//! access served by RAM counts as a miss at all three levels.

use crate::hierarchy::{Access, ServedBy};

/// Counters for one simulation session.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total load accesses processed.
    pub accesses: u64,
    /// Total cycles charged across all accesses.
    pub cycles: u64,

    /// L1 hit count.
    pub l1_hits: u64,
    /// L1 miss count.
    pub l1_misses: u64,
    /// L2 hit count.
    pub l2_hits: u64,
    /// L2 miss count.
    pub l2_misses: u64,
    /// L3 hit count.
    pub l3_hits: u64,
    /// L3 miss count.
    pub l3_misses: u64,
    /// Accesses satisfied by RAM.
    pub ram_fills: u64,
}

impl SimStats {
    /// Books one completed access into the counters.
    pub fn record(&mut self, access: &Access) {
        self.accesses += 1;
        self.cycles += access.cycles;

        match access.served_by {
            ServedBy::L1 => self.l1_hits += 1,
            ServedBy::L2 => {
                self.l1_misses += 1;
                self.l2_hits += 1;
            }
            ServedBy::L3 => {
                self.l1_misses += 1;
                self.l2_misses += 1;
                self.l3_hits += 1;
            }
            ServedBy::Ram => {
                self.l1_misses += 1;
                self.l2_misses += 1;
                self.l3_misses += 1;
                self.ram_fills += 1;
            }
        }
    }

    /// Hit rate of a level given its hit and miss counts, in percent.
    fn rate(hits: u64, misses: u64) -> f64 {
        let probes = hits + misses;
        if probes == 0 {
            0.0
        } else {
            (hits as f64 / probes as f64) * 100.0
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CACHE HIERARCHY SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses);
        println!("total_cycles             {}", self.cycles);
        println!("----------------------------------------------------------");
        println!(
            "l1.hits                  {} ({:.2}%)",
            self.l1_hits,
            Self::rate(self.l1_hits, self.l1_misses)
        );
        println!("l1.misses                {}", self.l1_misses);
        println!(
            "l2.hits                  {} ({:.2}%)",
            self.l2_hits,
            Self::rate(self.l2_hits, self.l2_misses)
        );
        println!("l2.misses                {}", self.l2_misses);
        println!(
            "l3.hits                  {} ({:.2}%)",
            self.l3_hits,
            Self::rate(self.l3_hits, self.l3_misses)
        );
        println!("l3.misses                {}", self.l3_misses);
        println!("ram.fills                {}", self.ram_fills);
        println!("==========================================================");
    }
}
