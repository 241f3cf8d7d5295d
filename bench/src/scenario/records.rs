//! Sorted insertion with growing element sizes.
//!
//! One table per record width, 4 to 256 bytes. Larger elements make the
//! vector shift more bytes per insertion while the list only pays for the
//! walk, so this is where the cache-locality advantage starts to shrink.

use super::{RunSettings, Scenario, ScenarioKind, run_table};
use crate::report::{RunObserver, ScenarioTable};
use seqbench_core::dataset::random_records;
use seqbench_core::workload::time_sorted_insertion;
use seqbench_core::{LinkedSeq, Record, Resolution, TimeValue};
use std::collections::VecDeque;

const SIZES: &[usize] = &[
    100, 200, 400, 800, 1_000, 2_000, 3_000, 4_000, 5_000, 7_000, 9_000, 11_000,
];

pub const COLUMNS: [&str; 3] = ["list", "vector", "deque"];

pub struct RecordSweep;

pub fn measure<const WORDS: usize>(values: &[Record<WORDS>], resolution: Resolution) -> Vec<TimeValue> {
    let list = {
        let mut list = LinkedSeq::new();
        time_sorted_insertion(values, &mut list, resolution)
    };
    let vector = {
        let mut vector = Vec::new();
        time_sorted_insertion(values, &mut vector, resolution)
    };
    let deque = {
        let mut deque = VecDeque::new();
        time_sorted_insertion(values, &mut deque, resolution)
    };
    vec![list, vector, deque]
}

fn sweep_width<const WORDS: usize>(
    settings: &RunSettings,
    observer: &mut dyn RunObserver,
) -> ScenarioTable {
    let mut rng = settings.rng();
    let bytes = Record::<WORDS>::SIZE_BYTES;
    let table = ScenarioTable::new(
        format!("Sorted insertion of {bytes}-byte records: list vs vector vs deque"),
        &COLUMNS,
        settings.resolution,
    )
    .with_note(format!("Test finished for {bytes} bytes records"));

    run_table(table, &settings.sizes(SIZES), observer, |n| {
        let values = random_records::<WORDS, _>(&mut rng, n);
        measure(&values, settings.resolution)
    })
}

impl Scenario for RecordSweep {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Records
    }

    fn base_sizes(&self) -> &'static [usize] {
        SIZES
    }

    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable> {
        vec![
            sweep_width::<1>(settings, observer),
            sweep_width::<2>(settings, observer),
            sweep_width::<4>(settings, observer),
            sweep_width::<8>(settings, observer),
            sweep_width::<16>(settings, observer),
            sweep_width::<32>(settings, observer),
            sweep_width::<64>(settings, observer),
        ]
    }
}
