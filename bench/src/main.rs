//! Runs the selected benchmark scenarios and prints one table per scenario.
//!
//! Usage:
//!   cargo run --release -p seqbench
//!   cargo run --release -p seqbench -- sort front --seed 42 --scale 0.1

use seqbench::config::{usage, BenchConfig};
use seqbench::report::{print_summary, ConsoleObserver};
use seqbench::scenario::RunSettings;
use seqbench_core::{timer, Resolution, SeedSource, StopWatch};
use std::process;

fn main() {
    let config = BenchConfig::load().unwrap_or_else(|e| {
        eprintln!("Error: {:#}\n\n{}", e, usage());
        process::exit(1);
    });

    if config.show_help {
        println!("{}", usage());
        return;
    }

    seqbench_core::initialize_logger(config.log_level, config.log_file.as_deref())
        .unwrap_or_else(|e| {
            eprintln!("Failed to initialize logger: {}. Exiting.", e);
            process::exit(1);
        });

    // Resolve a time-based seed once so the logged value replays the run.
    let seed = config.seed.seed();
    log::info!("Seed: {seed} (rerun with --seed {seed})");

    let settings = RunSettings {
        seed: SeedSource::Fixed(seed),
        scale: config.scale,
        resolution: config.resolution.unwrap_or_default(),
        concurrent: config.concurrent,
    };
    if settings.scale != 1.0 {
        log::info!("Input sizes scaled by {}", settings.scale);
    }

    let watch = StopWatch::start();
    let mut observer = ConsoleObserver;
    let mut tables = Vec::new();
    for kind in config.selected_scenarios() {
        log::info!("Running scenario '{kind}'");
        let (produced, elapsed_ms) = timer::measure(Resolution::Millis, || {
            kind.scenario().run(&settings, &mut observer)
        });
        log::info!("Scenario '{kind}' finished in {elapsed_ms} ms");
        tables.extend(produced);
    }

    print_summary(&tables, watch.elapsed());
}
