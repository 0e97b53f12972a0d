//! Fixed benchmark parameters.
//!
//! Everything here is a build-time constant; [BenchmarkConfig::default] gathers them into one
//! value the harness and CLI pass around. The only runtime override is [SEED_ENV_VAR].

use std::env;

use crate::game::policy::PolicyKind;
use crate::parallel::PartitionStrategy;

/// Wrong guesses allowed before a game is lost.
pub const ATTEMPTS_BUDGET: u32 = 6;

/// Games played against each item of the benchmark work list.
pub const GAMES_PER_ITEM: u32 = 1000;

/// Problem sizes (N): number of work items in the benchmark list.
pub const PROBLEM_SIZES: [usize; 4] = [1000, 2000, 3000, 4000];

/// Worker counts (P) tested against every problem size.
pub const WORKER_COUNTS: [usize; 4] = [2, 4, 6, 8];

/// Target repeated N times to build the synthetic benchmark list.
pub const REPRESENTATIVE_TARGET: &str = "apple";

/// Word list for the `words` demo command.
pub const FRUIT_WORDS: [&str; 10] = [
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
];

/// Games per word and chunk count for the `words` demo.
pub const FRUIT_GAMES_PER_WORD: u32 = 10_000;
pub const FRUIT_CHUNKS: usize = 4;

/// Chance that the frequency-weighted policy guesses at random instead.
pub const RANDOM_GUESS_PROBABILITY: f64 = 0.3;

/// Letters of English ordered from most to least frequent.
pub const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinsrhdlucmfywgpbvkxqjz";

/// Set to a u64 to make every run reproducible.
pub const SEED_ENV_VAR: &str = "HANGMAN_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub problem_sizes: Vec<usize>,
    pub worker_counts: Vec<usize>,
    pub games_per_item: u32,
    pub attempts_budget: u32,
    pub target: String,
    pub policy: PolicyKind,
    pub partition: PartitionStrategy,
    /// Also time a single-threaded run of each work list so speedup can be derived.
    pub measure_reference: bool,
    /// Base seed for per-chunk generators. None draws one from OS entropy per run.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            problem_sizes: PROBLEM_SIZES.to_vec(),
            worker_counts: WORKER_COUNTS.to_vec(),
            games_per_item: GAMES_PER_ITEM,
            attempts_budget: ATTEMPTS_BUDGET,
            target: REPRESENTATIVE_TARGET.to_string(),
            policy: PolicyKind::Uniform,
            partition: PartitionStrategy::LastAbsorbsRemainder,
            measure_reference: true,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Defaults plus the seed from [SEED_ENV_VAR], if set and parseable.
    pub fn from_env() -> Self {
        Self {
            seed: seed_from_env(),
            ..Self::default()
        }
    }
}

pub fn seed_from_env() -> Option<u64> {
    let raw = env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring {SEED_ENV_VAR}='{raw}': not an unsigned integer");
            None
        }
    }
}
