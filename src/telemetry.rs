//! CSV telemetry export for recorded state snapshots.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::GridState;

/// Schema v1 column header for CSV telemetry export.
const HEADER: &[&str] = &[
    "tick",
    "day",
    "time_of_day",
    "frequency_hz",
    "net_power_kw",
    "solar_kw",
    "demand_kw",
    "generator_kw",
    "battery_level_pct",
    "battery_mode",
    "status",
    "score",
];

/// One exported telemetry row: a state snapshot tagged with its tick index.
#[derive(Debug, Clone)]
pub struct TelemetryRow {
    /// Tick index at which the snapshot was taken.
    pub tick: u64,
    /// The snapshot itself.
    pub state: GridState,
}

impl TelemetryRow {
    fn record(&self) -> Vec<String> {
        let s = &self.state;
        vec![
            self.tick.to_string(),
            s.day.to_string(),
            format!("{:.4}", s.time_of_day),
            format!("{:.6}", s.frequency),
            format!("{:.4}", s.net_power),
            format!("{:.4}", s.solar_output),
            format!("{:.4}", s.city_demand),
            format!("{:.4}", s.generator_output),
            format!("{:.4}", s.battery_level),
            s.battery_mode.as_str().to_string(),
            s.status.as_str().to_string(),
            s.score.to_string(),
        ]
    }
}

/// Writes telemetry rows as CSV to any writer.
///
/// Emits the schema v1 header followed by one row per snapshot. Output is
/// deterministic for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv<W: Write>(rows: &[TelemetryRow], writer: W) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row.record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports telemetry rows to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[TelemetryRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(rows, io::BufWriter::new(file))
}
