//! Putting each new value in front of the older ones.
//!
//! For a linked list that is insertion at position 0. A vector does best by
//! appending instead; inserting at its front is the naive worst case.

use super::{RunSettings, Scenario, ScenarioKind, run_table};
use crate::report::{RunObserver, ScenarioTable};
use seqbench_core::dataset::random_dataset;
use seqbench_core::workload::{time_back_insertion, time_front_insertion};
use seqbench_core::{LinkedSeq, Resolution, TimeValue};

const SIZES: &[usize] = &[10, 100, 500, 1_000, 2_000, 10_000, 20_000, 40_000, 100_000];

pub const COLUMNS: [&str; 3] = ["list front", "vector back", "vector front"];

pub struct FrontScenario;

pub fn measure(values: &[u32], resolution: Resolution) -> Vec<TimeValue> {
    let mut list = LinkedSeq::new();
    let list_front = time_front_insertion(values, &mut list, resolution);

    let mut vector_best = Vec::new();
    let vector_back = time_back_insertion(values, &mut vector_best, resolution);

    let mut vector_worst = Vec::new();
    let vector_front = time_front_insertion(values, &mut vector_worst, resolution);

    vec![list_front, vector_back, vector_front]
}

impl Scenario for FrontScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Front
    }

    fn base_sizes(&self) -> &'static [usize] {
        SIZES
    }

    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable> {
        let mut rng = settings.rng();
        let table = ScenarioTable::new(
            "Front insertion: list vs vector (best: push back, worst: push front)",
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
