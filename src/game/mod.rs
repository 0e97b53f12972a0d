pub mod policy;
pub mod rng;
pub mod simulator;

use std::fmt;

pub use policy::{
    FrequencyPolicy, GuessPolicy, GuessView, PolicyKind, PolicyState, ScriptedPolicy,
    UniformPolicy,
};
pub use rng::{entropy_seed, Rng};
pub use simulator::{play, simulate, GameOutcome, GameReport};

/// Marks a position of the target that has not been revealed yet.
pub const MASK_SENTINEL: u8 = b'_';

pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase ASCII letter in `0..26`.
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

/// Lowercases `raw` and checks it is a non-empty run of ASCII letters.
pub fn normalize_target(raw: &str) -> Result<String, GameError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(GameError::InvalidTarget(raw.to_string()));
    }
    Ok(raw.to_ascii_lowercase())
}

/// Set of guessed letters, one bit per letter of the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn contains(self, letter: u8) -> bool {
        letter_index(letter).is_some_and(|index| self.0 & (1 << index) != 0)
    }

    /// Adds `letter`; false if it was already present or is not a lowercase letter.
    pub fn insert(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(index) if self.0 & (1 << index) == 0 => {
                self.0 |= 1 << index;
                true
            }
            _ => false,
        }
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters not yet in the set.
    pub fn remaining(self) -> u32 {
        ALPHABET_LEN as u32 - self.len()
    }

    /// Unguessed letters in alphabetical order.
    pub fn unguessed(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| !self.contains(letter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Target is empty or contains something other than ASCII letters.
    InvalidTarget(String),
    /// Policy returned a letter it had already guessed in this game.
    RepeatedGuess(char),
    /// Policy returned a byte that is not a lowercase letter.
    InvalidGuess(u8),
    /// Policy produced no guess while the game was still running.
    NoGuess,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(target) => {
                write!(f, "invalid target '{target}': expected one or more ASCII letters")
            }
            Self::RepeatedGuess(letter) => write!(f, "policy repeated guess '{letter}'"),
            Self::InvalidGuess(byte) => write!(f, "policy guessed non-letter byte 0x{byte:02x}"),
            Self::NoGuess => write!(f, "policy produced no guess for a live game"),
        }
    }
}

impl std::error::Error for GameError {}
