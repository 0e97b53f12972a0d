//! Letter-guessing policies.
//!
//! A policy only has to return a letter it has not guessed yet in the current game. Each game
//! builds its own policy state through [PolicyKind::start_game]; nothing is carried between games.

use std::cmp::Reverse;

use serde::Serialize;

use crate::config::{ENGLISH_FREQUENCY_ORDER, RANDOM_GUESS_PROBABILITY};
use crate::game::rng::Rng;
use crate::game::{letter_index, LetterSet, ALPHABET_LEN};

/// What a policy may look at before guessing.
#[derive(Debug, Clone, Copy)]
pub struct GuessView<'a> {
    pub guessed: LetterSet,
    /// Current reveal; unknown positions hold [crate::game::MASK_SENTINEL].
    pub mask: &'a [u8],
    /// Occurrences of each letter (`a` at index 0) still hidden in the target.
    pub hidden_counts: &'a [u32; ALPHABET_LEN],
}

pub trait GuessPolicy {
    fn next_guess(&mut self, view: &GuessView<'_>, rng: &mut Rng) -> Option<u8>;
}

/// Uniform pick among the letters not guessed yet.
fn random_unguessed(guessed: LetterSet, rng: &mut Rng) -> Option<u8> {
    let remaining = guessed.remaining();
    if remaining == 0 {
        return None;
    }
    let pick = rng.next_below(remaining) as usize;
    guessed.unguessed().nth(pick)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl GuessPolicy for UniformPolicy {
    fn next_guess(&mut self, view: &GuessView<'_>, rng: &mut Rng) -> Option<u8> {
        random_unguessed(view.guessed, rng)
    }
}

/// Mostly guesses the unguessed letter with the most hidden occurrences, with a fixed chance of
/// a uniform random guess instead. Ties fall back to English letter frequency.
#[derive(Debug, Clone)]
pub struct FrequencyPolicy {
    random_probability: f64,
    order: [u8; ALPHABET_LEN],
}

impl FrequencyPolicy {
    pub fn new(random_probability: f64) -> Self {
        Self {
            random_probability,
            order: *ENGLISH_FREQUENCY_ORDER,
        }
    }

    /// Current preference order, most preferred first.
    pub fn order(&self) -> &[u8; ALPHABET_LEN] {
        &self.order
    }

    fn resort(&mut self, hidden_counts: &[u32; ALPHABET_LEN]) {
        // Stable, so equal counts keep their previous relative order.
        self.order.sort_by_key(|&letter| {
            Reverse(letter_index(letter).map_or(0, |index| hidden_counts[index]))
        });
    }
}

impl Default for FrequencyPolicy {
    fn default() -> Self {
        Self::new(RANDOM_GUESS_PROBABILITY)
    }
}

impl GuessPolicy for FrequencyPolicy {
    fn next_guess(&mut self, view: &GuessView<'_>, rng: &mut Rng) -> Option<u8> {
        if rng.next_f64() < self.random_probability {
            return random_unguessed(view.guessed, rng);
        }
        self.resort(view.hidden_counts);
        self.order
            .iter()
            .copied()
            .find(|&letter| !view.guessed.contains(letter))
    }
}

/// Replays a fixed guess sequence, then runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    guesses: Vec<u8>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(guesses: impl Into<Vec<u8>>) -> Self {
        Self {
            guesses: guesses.into(),
            cursor: 0,
        }
    }
}

impl GuessPolicy for ScriptedPolicy {
    fn next_guess(&mut self, _view: &GuessView<'_>, _rng: &mut Rng) -> Option<u8> {
        let guess = self.guesses.get(self.cursor).copied();
        self.cursor += 1;
        guess
    }
}

/// Which policy a game runs with. Cheap to copy into every worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    Uniform,
    FrequencyWeighted { random_probability: f64 },
}

impl PolicyKind {
    pub fn frequency_weighted() -> Self {
        Self::FrequencyWeighted {
            random_probability: RANDOM_GUESS_PROBABILITY,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "uniform" | "random" => Some(Self::Uniform),
            "frequency" | "frequency_weighted" => Some(Self::frequency_weighted()),
            _ => None,
        }
    }

    /// Fresh policy state for one game.
    pub fn start_game(self) -> PolicyState {
        match self {
            Self::Uniform => PolicyState::Uniform(UniformPolicy),
            Self::FrequencyWeighted { random_probability } => {
                PolicyState::Frequency(FrequencyPolicy::new(random_probability))
            }
        }
    }
}

impl Default for PolicyKind {
    fn default() -> Self {
        Self::Uniform
    }
}

#[derive(Debug, Clone)]
pub enum PolicyState {
    Uniform(UniformPolicy),
    Frequency(FrequencyPolicy),
}

impl GuessPolicy for PolicyState {
    fn next_guess(&mut self, view: &GuessView<'_>, rng: &mut Rng) -> Option<u8> {
        match self {
            Self::Uniform(policy) => policy.next_guess(view, rng),
            Self::Frequency(policy) => policy.next_guess(view, rng),
        }
    }
}
