pub mod harness;
pub mod metrics;
pub mod report;

use std::fmt;

pub use harness::{
    measure, run_matrix, run_matrix_with, run_word_list, simulate_word, BenchmarkRecord,
    RunSummary,
};
pub use metrics::{derive_metrics, games_per_second, MetricsError, ScalingMetrics};
pub use report::{
    append_trend_log, record_row, to_csv, to_json, CsvReport, ReportFormat, TREND_LOG_PATH,
    UNAVAILABLE,
};

use crate::game::GameError;
use crate::parallel::ParallelError;

#[derive(Debug)]
pub enum BenchmarkError {
    Game(GameError),
    Parallel(ParallelError),
    Report(ReportError),
}

impl fmt::Display for BenchmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Game(err) => write!(f, "{err}"),
            Self::Parallel(err) => write!(f, "{err}"),
            Self::Report(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BenchmarkError {}

impl From<GameError> for BenchmarkError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<ParallelError> for BenchmarkError {
    fn from(err: ParallelError) -> Self {
        Self::Parallel(err)
    }
}

impl From<ReportError> for BenchmarkError {
    fn from(err: ReportError) -> Self {
        Self::Report(err)
    }
}

#[derive(Debug)]
pub enum ReportError {
    Csv(csv::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "failed to write CSV report: {err}"),
            Self::Json(err) => write!(f, "failed to serialize report: {err}"),
            Self::Io(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
