//! Units of work and their results.

use std::ops::Add;

use serde::Serialize;

use crate::game::{normalize_target, GameError};

/// One target word and how many independent games to play against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    target: String,
    repetitions: u32,
}

impl WorkItem {
    /// Rejects targets that are empty or contain anything but ASCII letters.
    pub fn new(target: &str, repetitions: u32) -> Result<Self, GameError> {
        Ok(Self {
            target: normalize_target(target)?,
            repetitions,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }
}

/// `count` copies of `target`, each played `repetitions` times.
pub fn uniform_work_list(
    target: &str,
    count: usize,
    repetitions: u32,
) -> Result<Vec<WorkItem>, GameError> {
    let item = WorkItem::new(target, repetitions)?;
    Ok(vec![item; count])
}

/// One item per word, each played `repetitions` times.
pub fn work_list_from_words<'w>(
    words: impl IntoIterator<Item = &'w str>,
    repetitions: u32,
) -> Result<Vec<WorkItem>, GameError> {
    words
        .into_iter()
        .map(|word| WorkItem::new(word, repetitions))
        .collect()
}

/// Total games a list of items will play.
pub fn total_repetitions(items: &[WorkItem]) -> u64 {
    items.iter().map(|item| u64::from(item.repetitions)).sum()
}

/// Contiguous slice of the work list handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub index: usize,
    pub items: &'a [WorkItem],
}

impl<'a> Chunk<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn games(&self) -> u64 {
        total_repetitions(self.items)
    }
}

/// Wins and games played by a single chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChunkResult {
    pub wins: u64,
    pub total_games: u64,
}

impl ChunkResult {
    pub fn new(wins: u64, total_games: u64) -> Self {
        debug_assert!(wins <= total_games);
        Self { wins, total_games }
    }
}

/// Sum of every chunk's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub wins: u64,
    pub total_games: u64,
}

impl AggregateResult {
    /// Fold chunk results in any order; the totals do not depend on it.
    pub fn from_chunks<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ChunkResult>,
    {
        results.into_iter().fold(Self::default(), |acc, result| acc + result)
    }

    pub fn win_rate_percent(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl Add<ChunkResult> for AggregateResult {
    type Output = Self;

    fn add(self, result: ChunkResult) -> Self {
        Self {
            wins: self.wins + result.wins,
            total_games: self.total_games + result.total_games,
        }
    }
}
