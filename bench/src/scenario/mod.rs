//! Benchmark scenarios.
//!
//! Each scenario is a thin driver over the shared workloads in
//! `seqbench_core::workload`: generate a dataset per input size, fill fresh
//! containers, time the operation, emit one row.

pub mod front;
pub mod linear;
pub mod records;
pub mod smart;
pub mod sort;

use crate::report::{RunObserver, ScenarioTable, TableRow};
use rand::rngs::StdRng;
use seqbench_core::{Resolution, SeedSource, TimeValue};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Linear,
    Smart,
    Front,
    Sort,
    Records,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::Linear,
        ScenarioKind::Smart,
        ScenarioKind::Front,
        ScenarioKind::Sort,
        ScenarioKind::Records,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Linear => "linear",
            ScenarioKind::Smart => "smart",
            ScenarioKind::Front => "front",
            ScenarioKind::Sort => "sort",
            ScenarioKind::Records => "records",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn scenario(&self) -> &'static dyn Scenario {
        match self {
            ScenarioKind::Linear => &linear::LinearScenario,
            ScenarioKind::Smart => &smart::SmartScenario,
            ScenarioKind::Front => &front::FrontScenario,
            ScenarioKind::Sort => &sort::SortScenario,
            ScenarioKind::Records => &records::RecordSweep,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings shared by every scenario in one run.
#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    pub seed: SeedSource,
    pub scale: f64,
    pub resolution: Resolution,
    pub concurrent: bool,
}

impl RunSettings {
    /// Fresh generator for one scenario. Every scenario starts from the same
    /// seed, so running a subset reproduces the same datasets.
    pub fn rng(&self) -> StdRng {
        self.seed.rng()
    }

    pub fn sizes(&self, base: &[usize]) -> Vec<usize> {
        scaled_sizes(base, self.scale)
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: SeedSource::default(),
            scale: 1.0,
            resolution: Resolution::Micros,
            concurrent: false,
        }
    }
}

/// Trait implemented by each benchmark scenario.
pub trait Scenario {
    fn kind(&self) -> ScenarioKind;

    /// Input sizes at scale 1.0.
    fn base_sizes(&self) -> &'static [usize];

    /// Runs the scenario, reporting progress through `observer`, and returns
    /// the finished tables.
    fn run(&self, settings: &RunSettings, observer: &mut dyn RunObserver) -> Vec<ScenarioTable>;
}

/// Scales every size by `scale`, never below one element, dropping sizes that
/// collapse onto the previous one.
pub fn scaled_sizes(base: &[usize], scale: f64) -> Vec<usize> {
    let mut sizes: Vec<usize> = base
        .iter()
        .map(|&n| ((n as f64 * scale).round() as usize).max(1))
        .collect();
    sizes.dedup();
    sizes
}

/// Measures one row per size and feeds it to the observer as it goes.
pub(crate) fn run_table(
    mut table: ScenarioTable,
    sizes: &[usize],
    observer: &mut dyn RunObserver,
    mut measure: impl FnMut(usize) -> Vec<TimeValue>,
) -> ScenarioTable {
    observer.table_started(&table);
    for &n in sizes {
        log::debug!("{}: measuring {} elements", table.title, n);
        let row = TableRow::new(n, measure(n));
        observer.row_measured(&table, &row);
        table.push_row(row);
    }
    observer.table_finished(&table);
    table
}
