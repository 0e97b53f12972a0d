//! Splitting the work list into chunks for parallel execution.
//!
//! Chunks are contiguous, non-overlapping and in order, so concatenating them reproduces the
//! original list. The default strategy gives every chunk `len / count` items and lets the last
//! one absorb the remainder; [PartitionStrategy::Balanced] spreads the remainder instead.

use serde::Serialize;

use crate::parallel::work::{Chunk, WorkItem};
use crate::parallel::ParallelError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Equal chunks of `floor(len / count)`; the last chunk takes what is left.
    #[default]
    LastAbsorbsRemainder,
    /// Sizes differ by at most one; earlier chunks are the larger ones.
    Balanced,
}

/// Split `total` items into exactly `num_batches` ranges `[start, end)`.
/// Returns no ranges when `num_batches` is 0.
///
/// # Example
/// ```
/// # use hangman_scaling::parallel::{batch_ranges, PartitionStrategy};
/// let ranges = batch_ranges(10, 4, PartitionStrategy::LastAbsorbsRemainder);
/// assert_eq!(ranges, vec![(0, 2), (2, 4), (4, 6), (6, 10)]);
/// ```
pub fn batch_ranges(
    total: usize,
    num_batches: usize,
    strategy: PartitionStrategy,
) -> Vec<(usize, usize)> {
    if num_batches == 0 {
        return Vec::new();
    }
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = match strategy {
            PartitionStrategy::LastAbsorbsRemainder if i + 1 == num_batches => total - start,
            PartitionStrategy::LastAbsorbsRemainder => base,
            PartitionStrategy::Balanced => base + usize::from(i < remainder),
        };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Split `items` into `chunk_count` chunks, the last one absorbing the remainder.
pub fn partition(items: &[WorkItem], chunk_count: usize) -> Result<Vec<Chunk<'_>>, ParallelError> {
    partition_with(items, chunk_count, PartitionStrategy::LastAbsorbsRemainder)
}

pub fn partition_with(
    items: &[WorkItem],
    chunk_count: usize,
    strategy: PartitionStrategy,
) -> Result<Vec<Chunk<'_>>, ParallelError> {
    if chunk_count == 0 {
        return Err(ParallelError::InvalidChunkCount(chunk_count));
    }
    Ok(batch_ranges(items.len(), chunk_count, strategy)
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| Chunk {
            index,
            items: &items[start..end],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::work::uniform_work_list;

    const LAST: PartitionStrategy = PartitionStrategy::LastAbsorbsRemainder;

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4, LAST);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_last_absorbs_remainder() {
        let r = batch_ranges(10, 4, LAST);
        assert_eq!(r, vec![(0, 2), (2, 4), (4, 6), (6, 10)]);
    }

    #[test]
    fn batch_ranges_balanced_spreads_remainder() {
        let r = batch_ranges(10, 3, PartitionStrategy::Balanced);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 5, LAST);
        assert_eq!(r, vec![(0, 0), (0, 0), (0, 0), (0, 0), (0, 3)]);
        let b = batch_ranges(3, 5, PartitionStrategy::Balanced);
        assert_eq!(b, vec![(0, 1), (1, 2), (2, 3), (3, 3), (3, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert_eq!(batch_ranges(0, 2, LAST), vec![(0, 0), (0, 0)]);
        assert!(batch_ranges(10, 0, LAST).is_empty());
    }

    #[test]
    fn partition_rejects_zero_chunks() {
        let items = uniform_work_list("apple", 4, 1).expect("valid word");
        assert!(matches!(
            partition(&items, 0),
            Err(ParallelError::InvalidChunkCount(0))
        ));
    }

    #[test]
    fn partition_indexes_chunks_in_order() {
        let items = uniform_work_list("apple", 10, 1).expect("valid word");
        let chunks = partition(&items, 4).expect("positive count");
        let indices: Vec<usize> = chunks.iter().map(|chunk| chunk.index).collect();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(sizes, vec![2, 2, 2, 4]);
    }
}
