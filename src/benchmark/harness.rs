//! Timing the parallel aggregate over a matrix of problem sizes and worker counts.
//!
//! Only the dispatch-and-reduce step sits inside the timer. Building the work list, partitioning
//! it and spawning the pool threads all happen before the clock starts.

use std::time::Instant;

use serde::Serialize;

use crate::benchmark::metrics::{derive_metrics, games_per_second};
use crate::benchmark::BenchmarkError;
use crate::config::BenchmarkConfig;
use crate::game::PolicyKind;
use crate::parallel::{
    aggregate, aggregate_sequential, partition, partition_with, uniform_work_list,
    work_list_from_words, AggregateResult, RunSettings, WorkerPool,
};

/// One (N, P) measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub problem_size: usize,
    pub worker_count: usize,
    pub elapsed_seconds: f64,
    pub total_wins: u64,
    pub total_games: u64,
    pub win_rate_percent: f64,
    /// Single-threaded time for the same work list, when measured.
    pub sequential_seconds: Option<f64>,
    pub speedup: Option<f64>,
    pub efficiency_percent: Option<f64>,
    pub games_per_second: Option<f64>,
}

/// Totals and timing of one parallel run over an explicit word list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub policy: PolicyKind,
    pub chunks: usize,
    pub workers: usize,
    pub total_wins: u64,
    pub total_games: u64,
    pub win_rate_percent: f64,
    pub elapsed_seconds: f64,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let started = Instant::now();
    let value = f();
    (value, started.elapsed().as_secs_f64())
}

/// Time `problem_size` copies of the configured target split across `worker_count` chunks and
/// workers.
pub fn measure(
    problem_size: usize,
    worker_count: usize,
    config: &BenchmarkConfig,
) -> Result<BenchmarkRecord, BenchmarkError> {
    let items = uniform_work_list(&config.target, problem_size, config.games_per_item)?;
    let chunks = partition_with(&items, worker_count, config.partition)?;
    let pool = WorkerPool::with_workers(worker_count)?;
    let settings =
        RunSettings::seeded_or_entropy(config.policy, config.attempts_budget, config.seed);

    let (result, elapsed_seconds) = timed(|| aggregate(&chunks, &pool, &settings));
    let result: AggregateResult = result?;

    let sequential_seconds = if config.measure_reference {
        let whole = partition(&items, 1)?;
        let (reference, seconds) = timed(|| aggregate_sequential(&whole, &settings));
        let reference = reference?;
        debug_assert_eq!(reference.total_games, result.total_games);
        Some(seconds)
    } else {
        None
    };

    let metrics = sequential_seconds.and_then(|sequential| {
        derive_metrics(sequential, elapsed_seconds, worker_count)
            .map_err(|err| log::warn!("N={problem_size} P={worker_count}: {err}"))
            .ok()
    });
    let throughput = games_per_second(result.total_games, elapsed_seconds).ok();

    let record = BenchmarkRecord {
        problem_size,
        worker_count,
        elapsed_seconds,
        total_wins: result.wins,
        total_games: result.total_games,
        win_rate_percent: result.win_rate_percent(),
        sequential_seconds,
        speedup: metrics.map(|m| m.speedup),
        efficiency_percent: metrics.map(|m| m.efficiency_percent),
        games_per_second: throughput,
    };
    log::info!(
        "N={} P={} elapsed={:.4}s games={} wins={}",
        record.problem_size,
        record.worker_count,
        record.elapsed_seconds,
        record.total_games,
        record.total_wins
    );
    Ok(record)
}

/// Measure every (N, P) pair, handing each record to `on_record` as soon as it is ready.
pub fn run_matrix_with<F>(config: &BenchmarkConfig, mut on_record: F) -> Result<(), BenchmarkError>
where
    F: FnMut(&BenchmarkRecord) -> Result<(), BenchmarkError>,
{
    for &problem_size in &config.problem_sizes {
        for &worker_count in &config.worker_counts {
            let record = measure(problem_size, worker_count, config)?;
            on_record(&record)?;
        }
    }
    Ok(())
}

pub fn run_matrix(config: &BenchmarkConfig) -> Result<Vec<BenchmarkRecord>, BenchmarkError> {
    let mut records =
        Vec::with_capacity(config.problem_sizes.len() * config.worker_counts.len());
    run_matrix_with(config, |record| {
        records.push(record.clone());
        Ok(())
    })?;
    Ok(records)
}

/// Play `games_per_word` games of every word, split into `chunk_count` chunks run on as many
/// workers.
pub fn run_word_list(
    words: &[&str],
    games_per_word: u32,
    chunk_count: usize,
    config: &BenchmarkConfig,
) -> Result<RunSummary, BenchmarkError> {
    let items = work_list_from_words(words.iter().copied(), games_per_word)?;
    let chunks = partition_with(&items, chunk_count, config.partition)?;
    let pool = WorkerPool::with_workers(chunk_count)?;
    let settings =
        RunSettings::seeded_or_entropy(config.policy, config.attempts_budget, config.seed);

    let (result, elapsed_seconds) = timed(|| aggregate(&chunks, &pool, &settings));
    let result = result?;
    Ok(RunSummary {
        label: words.join(","),
        policy: config.policy,
        chunks: chunks.len(),
        workers: pool.workers(),
        total_wins: result.wins,
        total_games: result.total_games,
        win_rate_percent: result.win_rate_percent(),
        elapsed_seconds,
    })
}

/// Play `games` games of one word on the calling thread.
pub fn simulate_word(
    word: &str,
    games: u32,
    config: &BenchmarkConfig,
) -> Result<RunSummary, BenchmarkError> {
    let items = work_list_from_words([word], games)?;
    let chunks = partition(&items, 1)?;
    let settings =
        RunSettings::seeded_or_entropy(config.policy, config.attempts_budget, config.seed);

    let (result, elapsed_seconds) = timed(|| aggregate_sequential(&chunks, &settings));
    let result = result?;
    Ok(RunSummary {
        label: items[0].target().to_string(),
        policy: config.policy,
        chunks: 1,
        workers: 1,
        total_wins: result.wins,
        total_games: result.total_games,
        win_rate_percent: result.win_rate_percent(),
        elapsed_seconds,
    })
}
