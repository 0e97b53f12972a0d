//! Sequential execution of one chunk.

use serde::Serialize;

use crate::config::ATTEMPTS_BUDGET;
use crate::game::{entropy_seed, play, GameError, PolicyKind, Rng};
use crate::parallel::work::{Chunk, ChunkResult};

/// Everything a chunk needs besides its items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSettings {
    pub policy: PolicyKind,
    pub attempts_budget: u32,
    /// Base seed; chunk `i` draws from stream `i` under it.
    pub seed: u64,
}

impl RunSettings {
    pub fn new(policy: PolicyKind, attempts_budget: u32, seed: u64) -> Self {
        Self {
            policy,
            attempts_budget,
            seed,
        }
    }

    /// Settings with the given seed, or one from OS entropy.
    pub fn seeded_or_entropy(policy: PolicyKind, attempts_budget: u32, seed: Option<u64>) -> Self {
        Self::new(policy, attempts_budget, seed.unwrap_or_else(entropy_seed))
    }

    /// Independent generator for `chunk`.
    pub fn rng_for(&self, chunk: &Chunk<'_>) -> Rng {
        Rng::for_stream(self.seed, chunk.index as u64)
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::new(PolicyKind::Uniform, ATTEMPTS_BUDGET, 0)
    }
}

/// Play every repetition of every item in `chunk`, one game after another.
/// An empty chunk yields `(0, 0)`.
pub fn run_chunk(
    chunk: &Chunk<'_>,
    policy: PolicyKind,
    attempts_budget: u32,
    rng: &mut Rng,
) -> Result<ChunkResult, GameError> {
    let mut wins = 0u64;
    for item in chunk.items {
        for _ in 0..item.repetitions() {
            if play(item.target(), policy, attempts_budget, rng)?.is_win() {
                wins += 1;
            }
        }
    }
    Ok(ChunkResult::new(wins, chunk.games()))
}

/// [run_chunk] with the generator `settings` assigns to this chunk.
pub fn run_chunk_with(chunk: &Chunk<'_>, settings: &RunSettings) -> Result<ChunkResult, GameError> {
    let mut rng = settings.rng_for(chunk);
    let result = run_chunk(chunk, settings.policy, settings.attempts_budget, &mut rng)?;
    log::debug!(
        "chunk {} done: {} items, {}/{} wins",
        chunk.index,
        chunk.len(),
        result.wins,
        result.total_games
    );
    Ok(result)
}
