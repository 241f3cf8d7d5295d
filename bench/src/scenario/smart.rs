//! Smart-list vs list vs vector sorted insertion.
//!
//! The smart list resumes its scan at the previous insertion point when the
//! next value is not smaller, which helps on runs of ascending input but does
//! not change the worst case.

use super::{RunSettings, Scenario, ScenarioKind, run_table};
use crate::report::{RunObserver, ScenarioTable};
use seqbench_core::dataset::random_dataset;
use seqbench_core::workload::{time_smart_sorted_insertion, time_sorted_insertion};
use seqbench_core::{LinkedSeq, Resolution, TimeValue};

const SIZES: &[usize] = &[
    10, 100, 500, 1_000, 2_000, 3_000, 4_000, 6_000, 8_000, 16_000, 32_000,
];

pub const COLUMNS: [&str; 3] = ["smart list", "list", "vector"];

pub struct SmartScenario;

pub fn measure(values: &[u32], resolution: Resolution) -> Vec<TimeValue> {
    let smart_list = {
        let mut list = LinkedSeq::new();
        time_smart_sorted_insertion(values, &mut list, resolution)
    };
    let list = {
        let mut list = LinkedSeq::new();
        time_sorted_insertion(values, &mut list, resolution)
    };
    let vector = {
        let mut vector = Vec::new();
        time_sorted_insertion(values, &mut vector, resolution)
    };
    vec![smart_list, list, vector]
}

impl Scenario for SmartScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Smart
    }

    fn base_sizes(&self) -> &'static [usize] {
        SIZES
    }

    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable> {
        let mut rng = settings.rng();
        let table = ScenarioTable::new(
            "Sorted insertion: smart list vs list vs vector",
            &COLUMNS,
            settings.resolution,
        );
        let table = run_table(table, &settings.sizes(SIZES), observer, |n| {
            let values = random_dataset(&mut rng, n);
            measure(&values, settings.resolution)
        });
        vec![table]
    }
}
