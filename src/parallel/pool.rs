//! Rayon thread pool configuration for simulation workloads.
//!
//! Use [WorkerPool::install] to run parallel chunk dispatch with a fixed number of threads, or
//! rely on Rayon's global pool (all CPU cores) via [WorkerPool::default_workers].

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::parallel::ParallelError;

/// Bounded set of worker threads that chunks are dispatched onto.
#[derive(Debug)]
pub struct WorkerPool {
    workers: usize,
    /// None means the global Rayon pool.
    pool: Option<ThreadPool>,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads(),
            pool: None,
        }
    }
}

impl WorkerPool {
    /// Use all available CPU cores (Rayon default).
    pub fn default_workers() -> Self {
        Self::default()
    }

    /// Use exactly `n` worker threads. The pool is built here, so callers can keep thread
    /// start-up out of any timed region.
    pub fn with_workers(n: usize) -> Result<Self, ParallelError> {
        if n == 0 {
            return Err(ParallelError::InvalidWorkerBudget(n));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(n)
            .thread_name(|index| format!("hangman-worker-{index}"))
            .build()
            .map_err(ParallelError::ThreadPool)?;
        Ok(Self {
            workers: n,
            pool: Some(pool),
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run a closure inside this pool; parallel iterators in `f` use only its threads.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_workers_is_rejected() {
        assert!(matches!(
            WorkerPool::with_workers(0),
            Err(ParallelError::InvalidWorkerBudget(0))
        ));
    }

    #[test]
    fn install_runs_on_requested_thread_count() {
        let pool = WorkerPool::with_workers(3).expect("pool builds");
        assert_eq!(pool.workers(), 3);
        assert_eq!(pool.install(rayon::current_num_threads), 3);
    }

    #[test]
    fn default_workers_uses_global_pool() {
        let pool = WorkerPool::default_workers();
        assert_eq!(pool.workers(), rayon::current_num_threads());
        assert_eq!(pool.install(|| 7), 7);
    }
}
