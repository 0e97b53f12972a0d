//! Fork-join dispatch of chunks and the post-join reduction.
//!
//! Every chunk becomes one task on the [WorkerPool]. Each task writes only its own result slot
//! (the collected `Vec`), and the totals are folded on the calling thread after all tasks have
//! joined, so the parallel phase needs no locks and the totals do not depend on completion order.

use rayon::prelude::*;

use crate::game::GameError;
use crate::parallel::pool::WorkerPool;
use crate::parallel::runner::{run_chunk_with, RunSettings};
use crate::parallel::work::{AggregateResult, Chunk, ChunkResult};
use crate::parallel::ParallelError;

/// Play every chunk on `pool` and sum the results.
pub fn aggregate(
    chunks: &[Chunk<'_>],
    pool: &WorkerPool,
    settings: &RunSettings,
) -> Result<AggregateResult, ParallelError> {
    aggregate_with(chunks, pool, |chunk| run_chunk_with(chunk, settings))
}

/// Like [aggregate] but runs the chunks one after another on the calling thread.
/// With the same settings the totals equal the parallel ones.
pub fn aggregate_sequential(
    chunks: &[Chunk<'_>],
    settings: &RunSettings,
) -> Result<AggregateResult, ParallelError> {
    let results = chunks
        .iter()
        .map(|chunk| run_chunk_with(chunk, settings))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AggregateResult::from_chunks(results))
}

/// Dispatch `runner` over `chunks` inside `pool`, join, then reduce.
/// The first chunk error aborts the whole run.
pub fn aggregate_with<F>(
    chunks: &[Chunk<'_>],
    pool: &WorkerPool,
    runner: F,
) -> Result<AggregateResult, ParallelError>
where
    F: Fn(&Chunk<'_>) -> Result<ChunkResult, GameError> + Sync,
{
    let results: Vec<ChunkResult> = pool.install(|| {
        chunks
            .par_iter()
            .map(|chunk| runner(chunk))
            .collect::<Result<Vec<_>, _>>()
    })?;
    Ok(AggregateResult::from_chunks(results))
}
