//! Drivers for the list vs vector vs deque micro-benchmarks.
//!
//! The measuring itself lives in `seqbench_core`; this crate turns it into
//! runnable scenarios, reads the run configuration and prints the tables.

pub mod config;
pub mod report;
pub mod scenario;
