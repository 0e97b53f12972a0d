pub mod aggregate;
pub mod batch;
pub mod pool;
pub mod runner;
pub mod work;

use std::fmt;

pub use aggregate::{aggregate, aggregate_sequential, aggregate_with};
pub use batch::{batch_ranges, partition, partition_with, PartitionStrategy};
pub use pool::WorkerPool;
pub use runner::{run_chunk, run_chunk_with, RunSettings};
pub use work::{
    total_repetitions, uniform_work_list, work_list_from_words, AggregateResult, Chunk,
    ChunkResult, WorkItem,
};

use crate::game::GameError;

#[derive(Debug)]
pub enum ParallelError {
    /// Asked to split work into zero chunks.
    InvalidChunkCount(usize),
    /// Asked for a pool with zero workers.
    InvalidWorkerBudget(usize),
    ThreadPool(rayon::ThreadPoolBuildError),
    Game(GameError),
}

impl fmt::Display for ParallelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunkCount(count) => {
                write!(f, "invalid chunk count {count}: must be at least 1")
            }
            Self::InvalidWorkerBudget(workers) => {
                write!(f, "invalid worker budget {workers}: must be at least 1")
            }
            Self::ThreadPool(err) => write!(f, "failed to build worker pool: {err}"),
            Self::Game(err) => write!(f, "game failed: {err}"),
        }
    }
}

impl std::error::Error for ParallelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
            Self::Game(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GameError> for ParallelError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}
