//! Cache hierarchy simulator CLI.
//!
//! This binary provides both front ends to the simulation engine:
//! 1. **Batch mode:** `-f <trace>` reads newline-separated hexadecimal load
//!    addresses from a file, feeds each through the hierarchy, and prints
//!    the total cycle count (plus an optional occupancy dump with `-l`).
//! 2. **Interactive mode:** without `-f`, a line-oriented prompt accepts
//!    hex addresses and the control tokens `s` (show cycles), `l` (dump
//!    occupied lines), and `q` (quit).
//!
//! Malformed addresses are fatal in batch mode and recoverable (report and
//! re-prompt) in interactive mode.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;

use cachesim_core::addr::parse_address;
use cachesim_core::{Access, Error, Hierarchy, HierarchyConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    version,
    about = "Multi-level CPU cache hierarchy simulator",
    long_about = "Simulates load accesses against three levels of fully-associative cache \
                  (L1, L2, L3) and backing RAM, accumulating cycle costs.\n\n\
                  Examples:\n  \
                  cachesim -f traces/loads.txt\n  \
                  cachesim -f traces/loads.txt -l --stats\n  \
                  cachesim                       (interactive prompt)"
)]
struct Cli {
    /// Trace file of newline-separated hex load addresses (batch mode).
    #[arg(short, long)]
    file: Option<String>,

    /// Display all occupied cache lines after the batch run.
    #[arg(short = 'l', long = "lines")]
    lines: bool,

    /// JSON file overriding the built-in hierarchy configuration.
    #[arg(long)]
    config: Option<String>,

    /// Print per-level hit/miss statistics after the batch run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut hierarchy = Hierarchy::new(&config);
    print_summary(&hierarchy);

    match cli.file {
        Some(path) => run_batch(&mut hierarchy, &path, cli.lines, cli.stats),
        None => run_interactive(&mut hierarchy),
    }
}

/// Loads the hierarchy configuration, from JSON if a path was given.
fn load_config(path: Option<&str>) -> Result<HierarchyConfig, Error> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text).map_err(|e| Error::ConfigFormat(e.to_string()))
        }
        None => Ok(HierarchyConfig::default()),
    }
}

/// Reads a trace file into a list of load addresses.
///
/// Blank lines are skipped; any other non-hex line is fatal to the run.
fn load_trace(path: &str) -> Result<Vec<u32>, Error> {
    let text = fs::read_to_string(path)?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_address)
        .collect()
}

/// Runs batch mode: process every trace address, then report.
fn run_batch(hierarchy: &mut Hierarchy, path: &str, dump_lines: bool, dump_stats: bool) {
    let addresses = match load_trace(path) {
        Ok(addresses) => addresses,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!("Reading from '{path}'...\n");
    for addr in addresses {
        let access = hierarchy.access(addr);
        print_access(addr, &access);
    }

    println!();
    println!("Total # of CPU Cycles: {}", hierarchy.cumulative_cycles());

    if dump_lines {
        print_cache_lines(hierarchy);
    }
    if dump_stats {
        hierarchy.stats().print();
    }
}

/// Runs the interactive prompt loop.
fn run_interactive(hierarchy: &mut Hierarchy) {
    print_help();

    let stdin = io::stdin();
    loop {
        print!("Load address: 0x");
        if io::stdout().flush().is_err() {
            process::exit(1);
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => {
                eprintln!("Error: input stream closed");
                process::exit(1);
            }
            Ok(_) => {}
        }

        let Some(token) = input.split_whitespace().next() else {
            continue;
        };

        match token {
            "s" => {
                println!("Total # of CPU Cycles: {}", hierarchy.cumulative_cycles());
                println!();
            }
            "l" => print_cache_lines(hierarchy),
            "q" => process::exit(0),
            _ => match parse_address(token) {
                Ok(addr) => {
                    let access = hierarchy.access(addr);
                    print_access(addr, &access);
                    println!();
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    println!();
                }
            },
        }
    }
}

/// Prints one access outcome in trace form.
fn print_access(addr: u32, access: &Access) {
    match access.frame {
        Some(frame) => println!(
            "{addr:#x}: Retrieved from {}, Frame: {frame}",
            access.served_by
        ),
        None => println!("{addr:#x}: Retrieved from {}", access.served_by),
    }
}

/// Prints the configuration summary table shown at startup.
fn print_summary(hierarchy: &Hierarchy) {
    println!("----------------------------------------------");
    println!(
        "{:<7} {:<10} {:<5} {:<10} {:<8}",
        "", "Line Size", "Sets", "Lines/Set", "Latency"
    );
    for (which, level) in hierarchy.cache_levels() {
        println!(
            "{:<7} {:<10} {:<5} {:<10} {:<8}",
            which.to_string(),
            level.line_bytes(),
            1,
            level.ways(),
            level.latency()
        );
    }
    println!(
        "{:<7} {:<10} {:<5} {:<10} {:<8}",
        "Memory",
        "N/A",
        "N/A",
        "N/A",
        hierarchy.ram_latency()
    );
    println!("----------------------------------------------");
    println!();
}

/// Dumps all occupied cache lines, per level, as `slot: frame` pairs.
fn print_cache_lines(hierarchy: &Hierarchy) {
    println!();
    for (which, level) in hierarchy.cache_levels() {
        println!("-- {which} --");
        for (slot, line) in level.occupied() {
            println!("{slot}: {}", line.frame);
        }
        println!();
    }
}

/// Prints the interactive-mode help text.
fn print_help() {
    println!(
        "CPU Cache Simulation\n \
         - CPU only supports a single instruction: load address\n \
         - Memory addresses limited to 32 bit\n \
         - Enter 's' to show the total number of CPU cycles\n \
         - Enter 'l' to display all occupied cache lines\n \
         - Enter 'q' to exit"
    );
    println!();
}
