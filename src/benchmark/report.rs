//! Rendering benchmark records as CSV or JSON.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::benchmark::harness::BenchmarkRecord;
use crate::benchmark::ReportError;

/// Printed in place of a metric that could not be derived.
pub const UNAVAILABLE: &str = "unavailable";

pub const SHORT_HEADER: [&str; 3] = ["ProblemSize", "WorkerCount", "ElapsedSeconds"];

pub const FULL_HEADER: [&str; 9] = [
    "ProblemSize",
    "WorkerCount",
    "ElapsedSeconds",
    "TotalWins",
    "TotalGames",
    "WinRatePercent",
    "SequentialSeconds",
    "Speedup",
    "EfficiencyPercent",
];

/// Default trend log written by `report --log`.
pub const TREND_LOG_PATH: &str = "benchmark_log.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Problem size, worker count and elapsed time only.
    Short,
    /// Adds totals, win rate and the derived metrics.
    Full,
}

impl ReportFormat {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Short => &SHORT_HEADER,
            Self::Full => &FULL_HEADER,
        }
    }
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |v| format!("{v:.precision$}"))
}

pub fn record_row(record: &BenchmarkRecord, format: ReportFormat) -> Vec<String> {
    let mut row = vec![
        record.problem_size.to_string(),
        record.worker_count.to_string(),
        format!("{:.6}", record.elapsed_seconds),
    ];
    if format == ReportFormat::Full {
        row.extend([
            record.total_wins.to_string(),
            record.total_games.to_string(),
            format!("{:.2}", record.win_rate_percent),
            optional(record.sequential_seconds, 6),
            optional(record.speedup, 3),
            optional(record.efficiency_percent, 2),
        ]);
    }
    row
}

/// CSV writer that emits the header up front and one row per record.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    format: ReportFormat,
}

impl<W: Write> CsvReport<W> {
    pub fn new(inner: W, format: ReportFormat) -> Result<Self, ReportError> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
        writer.write_record(format.header())?;
        writer.flush()?;
        Ok(Self { writer, format })
    }

    /// Write and flush one row, so long runs show progress line by line.
    pub fn write(&mut self, record: &BenchmarkRecord) -> Result<(), ReportError> {
        self.writer.write_record(record_row(record, self.format))?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|err| {
                let source = err.error();
                ReportError::Io(io::Error::new(source.kind(), source.to_string()))
            })
    }
}

pub fn to_csv(records: &[BenchmarkRecord], format: ReportFormat) -> Result<String, ReportError> {
    let mut report = CsvReport::new(Vec::new(), format)?;
    for record in records {
        report.write(record)?;
    }
    let bytes = report.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn to_json(records: &[BenchmarkRecord]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(records).map_err(ReportError::Json)
}

/// Append one timestamped row per record to `path`, writing the header if the file is new.
pub fn append_trend_log(path: &Path, records: &[BenchmarkRecord]) -> Result<(), ReportError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(ReportError::Io)?;
    let is_empty = file.metadata().map(|m| m.len() == 0).unwrap_or(true);

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    if is_empty {
        let mut header = vec!["date"];
        header.extend(FULL_HEADER);
        writer.write_record(&header)?;
    }
    let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    for record in records {
        let mut row = vec![date.clone()];
        row.extend(record_row(record, ReportFormat::Full));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
