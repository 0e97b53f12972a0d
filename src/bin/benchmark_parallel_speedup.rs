//! Play the fruit word list once sequentially and once in parallel, then print timings and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup
//!
//! Both runs share one seed, so their totals must match exactly.

use std::process;
use std::time::Instant;

use hangman_scaling::config::{
    seed_from_env, ATTEMPTS_BUDGET, FRUIT_CHUNKS, FRUIT_GAMES_PER_WORD, FRUIT_WORDS,
};
use hangman_scaling::game::{entropy_seed, PolicyKind};
use hangman_scaling::parallel::{
    aggregate, aggregate_sequential, partition, work_list_from_words, RunSettings, WorkerPool,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("benchmark failed: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let seed = seed_from_env().unwrap_or_else(entropy_seed);
    let settings = RunSettings::new(PolicyKind::frequency_weighted(), ATTEMPTS_BUDGET, seed);
    let items = work_list_from_words(FRUIT_WORDS, FRUIT_GAMES_PER_WORD)?;
    let chunks = partition(&items, FRUIT_CHUNKS)?;
    let pool = WorkerPool::with_workers(FRUIT_CHUNKS)?;

    let games = items.len() as f64 * f64::from(FRUIT_GAMES_PER_WORD);
    println!(
        "Hangman: {} words × {} games, {} chunks (seed={})",
        items.len(),
        FRUIT_GAMES_PER_WORD,
        chunks.len(),
        seed
    );
    println!();

    // Sequential
    let t0 = Instant::now();
    let seq = aggregate_sequential(&chunks, &settings)?;
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!("Sequential:  {:.2} ms  ({:.1} games/s)", seq_ms, games / elapsed_seq.as_secs_f64());

    // Parallel
    let t0 = Instant::now();
    let par = aggregate(&chunks, &pool, &settings)?;
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!("Parallel:    {:.2} ms  ({:.1} games/s)", par_ms, games / elapsed_par.as_secs_f64());

    println!();
    if par_ms > 0.0 {
        let speedup = seq_ms / par_ms;
        println!("Speedup:     {:.2}x faster (parallel vs sequential)", speedup);
        println!("Efficiency:  {:.1}%", speedup / pool.workers() as f64 * 100.0);
    } else {
        println!("Speedup:     unavailable (parallel run below timer resolution)");
    }

    if seq != par {
        return Err(format!("totals differ: sequential {seq:?}, parallel {par:?}").into());
    }
    println!(
        "(Results match sequential vs parallel: {} wins / {} games, {:.2}%)",
        par.wins,
        par.total_games,
        par.win_rate_percent()
    );
    Ok(())
}
