//! Parallel hangman simulation and scaling benchmarks.
//!
//! A work list of target words is split into chunks ([parallel::partition]), each chunk plays its
//! games on one worker of a bounded pool, and the per-chunk win counts are summed after every
//! worker has joined ([parallel::aggregate]). [benchmark] times that step across problem sizes
//! and worker counts.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod game;
pub mod parallel;
