//! Integration tests: run every scenario at a tiny scale and check the shape
//! of the produced tables and the observer callbacks.

use seqbench::config::BenchConfig;
use seqbench::report::{RunObserver, ScenarioTable, SilentObserver, TableRow};
use seqbench::scenario::{linear, RunSettings, ScenarioKind};
use seqbench_core::dataset::random_dataset;
use seqbench_core::{Record, Resolution, SeedSource};

fn small_settings() -> RunSettings {
    RunSettings {
        seed: SeedSource::Fixed(7),
        scale: 0.01,
        resolution: Resolution::Micros,
        concurrent: false,
    }
}

/// Records every callback so the order can be checked.
#[derive(Default)]
struct RecordingObserver {
    events: Vec<String>,
}

impl RunObserver for RecordingObserver {
    fn table_started(&mut self, table: &ScenarioTable) {
        self.events.push(format!("start {}", table.title));
    }

    fn row_measured(&mut self, _table: &ScenarioTable, row: &TableRow) {
        self.events.push(format!("row {}", row.elements));
    }

    fn table_finished(&mut self, table: &ScenarioTable) {
        self.events.push(format!("finish {}", table.title));
    }
}

#[test]
fn every_scenario_produces_one_row_per_size() {
    let settings = small_settings();
    for kind in ScenarioKind::ALL {
        let scenario = kind.scenario();
        let sizes = settings.sizes(scenario.base_sizes());
        let tables = scenario.run(&settings, &mut SilentObserver);

        assert!(!tables.is_empty(), "{kind} produced no tables");
        for table in &tables {
            let elements: Vec<usize> = table.rows.iter().map(|r| r.elements).collect();
            assert_eq!(elements, sizes, "{kind}: {}", table.title);
            for row in &table.rows {
                assert_eq!(row.timings.len(), table.columns.len());
            }
        }
    }
}

#[test]
fn column_layouts_match_scenarios() {
    let settings = small_settings();
    let columns = |kind: ScenarioKind| -> Vec<String> {
        kind.scenario().run(&settings, &mut SilentObserver)[0]
            .columns
            .clone()
    };

    assert_eq!(
        columns(ScenarioKind::Linear),
        vec!["list add", "vector add", "list erase", "vector erase"]
    );
    assert_eq!(columns(ScenarioKind::Smart), vec!["smart list", "list", "vector"]);
    assert_eq!(
        columns(ScenarioKind::Front),
        vec!["list front", "vector back", "vector front"]
    );
    assert_eq!(columns(ScenarioKind::Sort), vec!["list", "vector", "deque"]);
}

#[test]
fn record_sweep_has_one_table_per_width() {
    let tables = ScenarioKind::Records
        .scenario()
        .run(&small_settings(), &mut SilentObserver);
    assert_eq!(tables.len(), 7);

    let widths = [
        Record::<1>::SIZE_BYTES,
        Record::<2>::SIZE_BYTES,
        Record::<4>::SIZE_BYTES,
        Record::<8>::SIZE_BYTES,
        Record::<16>::SIZE_BYTES,
        Record::<32>::SIZE_BYTES,
        Record::<64>::SIZE_BYTES,
    ];
    assert_eq!(widths, [4, 8, 16, 32, 64, 128, 256]);
    for (table, bytes) in tables.iter().zip(widths) {
        assert!(
            table.title.contains(&format!("{bytes}-byte")),
            "{}",
            table.title
        );
    }
}

#[test]
fn observer_sees_rows_between_start_and_finish() {
    let settings = small_settings();
    let mut observer = RecordingObserver::default();
    let tables = ScenarioKind::Front.scenario().run(&settings, &mut observer);
    let table = &tables[0];

    assert_eq!(observer.events.first(), Some(&format!("start {}", table.title)));
    assert_eq!(observer.events.last(), Some(&format!("finish {}", table.title)));
    let rows: Vec<&String> = observer.events[1..observer.events.len() - 1].iter().collect();
    assert_eq!(rows.len(), table.rows.len());
    for (event, row) in rows.iter().zip(&table.rows) {
        assert_eq!(**event, format!("row {}", row.elements));
    }
}

#[test]
fn concurrent_linear_run_has_the_same_shape_as_serial() {
    let serial = small_settings();
    let concurrent = RunSettings {
        concurrent: true,
        ..serial
    };

    let a = ScenarioKind::Linear.scenario().run(&serial, &mut SilentObserver);
    let b = ScenarioKind::Linear
        .scenario()
        .run(&concurrent, &mut SilentObserver);

    assert_eq!(a[0].rows.len(), b[0].rows.len());
    assert!(a[0].title.contains("serial"));
    assert!(b[0].title.contains("concurrent"));
}

#[test]
fn concurrent_measurement_leaves_the_dataset_untouched() {
    let mut rng = SeedSource::Fixed(3).rng();
    let values = random_dataset(&mut rng, 300);
    let before = values.clone();
    let timings = linear::measure_concurrent(&values, &mut rng, Resolution::Micros);
    assert_eq!(values, before);
    assert_eq!(timings.to_vec().len(), linear::COLUMNS.len());
}

#[test]
fn fixed_seed_reproduces_datasets() {
    let settings = small_settings();
    let a = random_dataset(&mut settings.rng(), 64);
    let b = random_dataset(&mut settings.rng(), 64);
    assert_eq!(a, b);
}

#[test]
fn config_arguments_select_scenarios() {
    let mut config = BenchConfig::default();
    config
        .apply_args(["front", "--seed", "5", "--ms"])
        .unwrap();
    assert_eq!(config.selected_scenarios(), vec![ScenarioKind::Front]);
    assert_eq!(config.seed, SeedSource::Fixed(5));
    assert_eq!(config.resolution, Some(Resolution::Millis));
}
