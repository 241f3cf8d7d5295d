//! Sorted linear insertion followed by random-position erase, list vs vector.
//!
//! Both operations reach their position by a linear walk, so the only
//! difference between the containers is how they sit in memory.

use super::{RunSettings, Scenario, ScenarioKind, run_table};
use crate::report::{RunObserver, ScenarioTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqbench_core::dataset::random_dataset;
use seqbench_core::workload::{time_random_erase, time_sorted_insertion};
use seqbench_core::{LinkedSeq, Resolution, TimeValue};
use std::thread;

const SIZES: &[usize] = &[100, 200, 500, 1_000, 4_000, 10_000, 20_000, 40_000];

pub const COLUMNS: [&str; 4] = ["list add", "vector add", "list erase", "vector erase"];

pub struct LinearScenario;

/// Timings for one dataset, in [`COLUMNS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTimings {
    pub list_insert: TimeValue,
    pub vector_insert: TimeValue,
    pub list_erase: TimeValue,
    pub vector_erase: TimeValue,
}

impl LinearTimings {
    pub fn to_vec(self) -> Vec<TimeValue> {
        vec![
            self.list_insert,
            self.vector_insert,
            self.list_erase,
            self.vector_erase,
        ]
    }
}

/// Inserts `values` into a fresh list, then erases it at random positions.
/// Returns `(insert, erase)`.
fn list_pass<R: Rng + ?Sized>(values: &[u32], rng: &mut R, resolution: Resolution) -> (TimeValue, TimeValue) {
    let mut list = LinkedSeq::new();
    let insert = time_sorted_insertion(values, &mut list, resolution);
    let erase = time_random_erase(rng, &mut list, resolution);
    (insert, erase)
}

fn vector_pass<R: Rng + ?Sized>(values: &[u32], rng: &mut R, resolution: Resolution) -> (TimeValue, TimeValue) {
    let mut vector = Vec::new();
    let insert = time_sorted_insertion(values, &mut vector, resolution);
    let erase = time_random_erase(rng, &mut vector, resolution);
    (insert, erase)
}

pub fn measure_serial(values: &[u32], rng: &mut StdRng, resolution: Resolution) -> LinearTimings {
    let (list_insert, list_erase) = list_pass(values, rng, resolution);
    let (vector_insert, vector_erase) = vector_pass(values, rng, resolution);
    LinearTimings {
        list_insert,
        vector_insert,
        list_erase,
        vector_erase,
    }
}

/// Same measurements as [`measure_serial`], with the list pass on a scoped
/// worker thread while the vector pass runs here. The two passes share only
/// the read-only dataset; the worker gets its own generator.
pub fn measure_concurrent(values: &[u32], rng: &mut StdRng, resolution: Resolution) -> LinearTimings {
    let worker_seed: u64 = rng.gen();

    thread::scope(|scope| {
        let list_job = scope.spawn(move || {
            let mut worker_rng = StdRng::seed_from_u64(worker_seed);
            list_pass(values, &mut worker_rng, resolution)
        });

        let (vector_insert, vector_erase) = vector_pass(values, rng, resolution);
        let (list_insert, list_erase) = list_job
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

        LinearTimings {
            list_insert,
            vector_insert,
            list_erase,
            vector_erase,
        }
    })
}

impl Scenario for LinearScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Linear
    }

    fn base_sizes(&self) -> &'static [usize] {
        SIZES
    }

    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable> {
        let mut rng = settings.rng();
        let mode = if settings.concurrent { "concurrent" } else { "serial" };
        let table = ScenarioTable::new(
            format!("Linear insert (sorted) and random erase, list vs vector [{mode}]"),
            &COLUMNS,
            settings.resolution,
        )
        .with_note("Insert and erase both walk to their position; the vector wins on cache locality.");

        let table = run_table(table, &settings.sizes(SIZES), observer, |n| {
            let values = random_dataset(&mut rng, n);
            let timings = if settings.concurrent {
                measure_concurrent(&values, &mut rng, settings.resolution)
            } else {
                measure_serial(&values, &mut rng, settings.resolution)
            };
            timings.to_vec()
        });
        vec![table]
    }
}
