//! Sorting the whole container at once: list merge sort vs slice sort.

use super::{RunSettings, Scenario, ScenarioKind, run_table};
use crate::report::{RunObserver, ScenarioTable};
use seqbench_core::dataset::random_dataset;
use seqbench_core::workload::time_full_sort;
use seqbench_core::{LinkedSeq, Resolution, TimeValue};
use std::collections::VecDeque;

const SIZES: &[usize] = &[10, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

pub const COLUMNS: [&str; 3] = ["list", "vector", "deque"];

pub struct SortScenario;

pub fn measure(values: &[u32], resolution: Resolution) -> Vec<TimeValue> {
    let mut list: LinkedSeq<u32> = values.iter().copied().collect();
    let mut vector = values.to_vec();
    let mut deque: VecDeque<u32> = values.iter().copied().collect();

    let list_time = time_full_sort(&mut list, resolution);
    let vector_time = time_full_sort(&mut vector, resolution);
    let deque_time = time_full_sort(&mut deque, resolution);

    debug_assert!(list.iter().eq(vector.iter()));
    debug_assert!(deque.iter().eq(vector.iter()));

    vec![list_time, vector_time, deque_time]
}

impl Scenario for SortScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Sort
    }

    fn base_sizes(&self) -> &'static [usize] {
        SIZES
    }

    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable> {
        let mut rng = settings.rng();
        let table = ScenarioTable::new(
            "Full sort: list vs vector vs deque",
            &COLUMNS,
            settings.resolution,
        )
        .with_relative();
        let table = run_table(table, &settings.sizes(SIZES), observer, |n| {
            let values = random_dataset(&mut rng, n);
            measure(&values, settings.resolution)
        });
        vec![table]
    }
}
