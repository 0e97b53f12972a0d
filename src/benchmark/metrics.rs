//! Speedup and efficiency derived from measured durations.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingMetrics {
    /// Sequential time divided by parallel time.
    pub speedup: f64,
    /// Speedup per worker, as a percentage.
    pub efficiency_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricsError {
    /// Divisor was zero, negative or not a number, usually a duration below timer resolution.
    DivisionUndefined { quantity: &'static str, divisor: f64 },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionUndefined { quantity, divisor } => {
                write!(f, "cannot derive {quantity}: divisor {divisor} is not positive")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

fn positive(quantity: &'static str, divisor: f64) -> Result<f64, MetricsError> {
    if divisor > 0.0 {
        Ok(divisor)
    } else {
        Err(MetricsError::DivisionUndefined { quantity, divisor })
    }
}

pub fn derive_metrics(
    sequential_seconds: f64,
    parallel_seconds: f64,
    workers: usize,
) -> Result<ScalingMetrics, MetricsError> {
    let parallel = positive("speedup", parallel_seconds)?;
    let sequential = positive("speedup", sequential_seconds)?;
    let workers = positive("efficiency", workers as f64)?;
    let speedup = sequential / parallel;
    Ok(ScalingMetrics {
        speedup,
        efficiency_percent: speedup / workers * 100.0,
    })
}

/// Games completed per second of wall-clock time.
pub fn games_per_second(games: u64, seconds: f64) -> Result<f64, MetricsError> {
    Ok(games as f64 / positive("throughput", seconds)?)
}
