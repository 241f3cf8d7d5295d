//! Report module: prints benchmark tables and the run summary.
//!
//! Rows are printed as `<elements>, <t1>, <t2>, ...`, optionally annotated
//! with each timing as a percentage of the fastest one in the row.

use seqbench_core::{Resolution, TimeValue};
use std::io::{self, Write};
use std::time::Duration;

/// Timings measured for one input size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub elements: usize,
    pub timings: Vec<TimeValue>,
}

impl TableRow {
    pub fn new(elements: usize, timings: Vec<TimeValue>) -> Self {
        Self { elements, timings }
    }

    pub fn fastest(&self) -> Option<TimeValue> {
        self.timings.iter().copied().min()
    }

    /// Timing at `column` as a percentage of the fastest timing in the row.
    /// `None` when the fastest timing rounds to zero.
    pub fn percent_of_fastest(&self, column: usize) -> Option<f64> {
        let fastest = self.fastest().filter(|&t| t > 0)?;
        let value = *self.timings.get(column)?;
        Some(value as f64 * 100.0 / fastest as f64)
    }
}

/// Results of one scenario (or one record width of the record sweep).
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    pub title: String,
    pub columns: Vec<String>,
    pub resolution: Resolution,
    pub rows: Vec<TableRow>,
    /// Print percent-of-fastest next to each timing.
    pub show_relative: bool,
    /// Free-form line printed under the table.
    pub note: Option<String>,
}

impl ScenarioTable {
    pub fn new(title: impl Into<String>, columns: &[&str], resolution: Resolution) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            resolution,
            rows: Vec::new(),
            show_relative: false,
            note: None,
        }
    }

    pub fn with_relative(mut self) -> Self {
        self.show_relative = true;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn push_row(&mut self, row: TableRow) {
        debug_assert_eq!(row.timings.len(), self.columns.len());
        self.rows.push(row);
    }

    /// All timings of one column, top to bottom.
    pub fn column(&self, index: usize) -> Vec<TimeValue> {
        self.rows
            .iter()
            .filter_map(|row| row.timings.get(index).copied())
            .collect()
    }

    pub fn header(&self) -> String {
        let mut header = String::from("elements");
        for column in &self.columns {
            header.push_str(&format!(", {} [{}]", column, self.resolution.unit()));
        }
        header
    }

    pub fn format_row(&self, row: &TableRow) -> String {
        let mut line = format!("{:>10}", row.elements);
        for (i, timing) in row.timings.iter().enumerate() {
            line.push_str(&format!(",\t{:>10}", timing));
            if self.show_relative {
                match row.percent_of_fastest(i) {
                    Some(pct) => line.push_str(&format!(" ({:>5.0}%)", pct)),
                    None => line.push_str("       -"),
                }
            }
        }
        line
    }
}

/// Print the table banner and header.
pub fn print_table_header(table: &ScenarioTable) {
    println!("\n{}", "=".repeat(80));
    println!("  {}", table.title);
    println!("{}", "=".repeat(80));
    println!("{}", table.header());
}

pub fn print_row(table: &ScenarioTable, row: &TableRow) {
    println!("{}", table.format_row(row));
}

pub fn print_table_footer(table: &ScenarioTable) {
    if let Some(note) = &table.note {
        println!("  {}", note);
    }
}

/// Print a complete table in one go.
pub fn print_table(table: &ScenarioTable) {
    print_table_header(table);
    for row in &table.rows {
        print_row(table, row);
    }
    print_table_footer(table);
}

/// Receives tables and rows while a scenario is still running.
pub trait RunObserver {
    fn table_started(&mut self, table: &ScenarioTable);
    fn row_measured(&mut self, table: &ScenarioTable, row: &TableRow);
    fn table_finished(&mut self, table: &ScenarioTable);
}

/// Prints every row to stdout as soon as it is measured.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn table_started(&mut self, table: &ScenarioTable) {
        print_table_header(table);
        let _ = io::stdout().flush();
    }

    fn row_measured(&mut self, table: &ScenarioTable, row: &TableRow) {
        print_row(table, row);
        let _ = io::stdout().flush();
    }

    fn table_finished(&mut self, table: &ScenarioTable) {
        print_table_footer(table);
    }
}

/// Discards progress; callers only want the returned tables.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {
    fn table_started(&mut self, _table: &ScenarioTable) {}

    fn row_measured(&mut self, _table: &ScenarioTable, _row: &TableRow) {}

    fn table_finished(&mut self, _table: &ScenarioTable) {}
}

/// Print the closing summary: one line per table and the total wall time.
pub fn print_summary(tables: &[ScenarioTable], total: Duration) {
    println!("\n{}", "=".repeat(80));
    println!("  Summary");
    println!("{}", "=".repeat(80));
    println!("  {:48} {:>8} {:>12}", "Table", "Rows", "Largest N");
    println!("  {}", "-".repeat(70));
    for table in tables {
        let largest = table.rows.iter().map(|r| r.elements).max().unwrap_or(0);
        println!("  {:48} {:>8} {:>12}", table.title, table.rows.len(), largest);
    }

    let total_ms = total.as_millis();
    println!(
        "\n  Exiting test, the whole measuring took {} ms ({} seconds or {} minutes)",
        total_ms,
        total_ms / 1000,
        total_ms / 60_000
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::{ScenarioTable, TableRow};
    use seqbench_core::Resolution;

    #[test]
    fn percent_of_fastest() {
        let row = TableRow::new(10, vec![200, 100, 350]);
        assert_eq!(row.fastest(), Some(100));
        assert_eq!(row.percent_of_fastest(0), Some(200.0));
        assert_eq!(row.percent_of_fastest(1), Some(100.0));
        assert_eq!(row.percent_of_fastest(2), Some(350.0));
        assert_eq!(row.percent_of_fastest(3), None);
    }

    #[test]
    fn percent_of_zero_fastest_is_undefined() {
        let row = TableRow::new(10, vec![0, 5]);
        assert_eq!(row.percent_of_fastest(1), None);
    }

    #[test]
    fn header_lists_columns_with_unit() {
        let table = ScenarioTable::new("t", &["list", "vector"], Resolution::Millis);
        assert_eq!(table.header(), "elements, list [ms], vector [ms]");
    }

    #[test]
    fn row_starts_with_element_count_and_keeps_column_order() {
        let table = ScenarioTable::new("t", &["a", "b"], Resolution::Micros);
        let line = table.format_row(&TableRow::new(42, vec![7, 3]));
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        assert_eq!(fields, vec!["42", "7", "3"]);
    }

    #[test]
    fn relative_rows_include_percentages() {
        let table = ScenarioTable::new("t", &["a", "b"], Resolution::Micros).with_relative();
        let line = table.format_row(&TableRow::new(1, vec![50, 25]));
        assert!(line.contains("200%"));
        assert!(line.contains("100%"));
    }

    #[test]
    fn column_collects_timings() {
        let mut table = ScenarioTable::new("t", &["a", "b"], Resolution::Micros);
        table.push_row(TableRow::new(1, vec![1, 2]));
        table.push_row(TableRow::new(2, vec![3, 4]));
        assert_eq!(table.column(1), vec![2, 4]);
    }
}
