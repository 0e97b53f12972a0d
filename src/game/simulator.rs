use serde::Serialize;

use crate::game::policy::{GuessPolicy, GuessView, PolicyKind};
use crate::game::rng::Rng;
use crate::game::{letter_index, GameError, LetterSet, ALPHABET_LEN, MASK_SENTINEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Win,
    Loss,
}

impl GameOutcome {
    pub fn is_win(self) -> bool {
        self == Self::Win
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub attempts_left: u32,
    /// Distinct letters guessed before the game ended.
    pub guesses: u32,
    /// Final reveal, with [MASK_SENTINEL] at positions never uncovered.
    pub mask: String,
}

/// Play one game of `target` with `attempts_budget` wrong guesses allowed.
///
/// Every correct guess uncovers at least one position and every wrong guess costs an attempt,
/// and the policy may not repeat a letter, so a game ends after at most 26 guesses.
pub fn simulate<P>(
    target: &str,
    attempts_budget: u32,
    policy: &mut P,
    rng: &mut Rng,
) -> Result<GameReport, GameError>
where
    P: GuessPolicy + ?Sized,
{
    let word = target.as_bytes();
    let mut hidden_counts = [0u32; ALPHABET_LEN];
    for &letter in word {
        let index = letter_index(letter).ok_or_else(|| GameError::InvalidTarget(target.to_string()))?;
        hidden_counts[index] += 1;
    }
    if word.is_empty() {
        return Err(GameError::InvalidTarget(String::new()));
    }

    let mut mask = vec![MASK_SENTINEL; word.len()];
    let mut unknown = word.len();
    let mut attempts_left = attempts_budget;
    let mut guessed = LetterSet::default();
    let mut guesses = 0u32;

    while attempts_left > 0 && unknown > 0 {
        let view = GuessView {
            guessed,
            mask: &mask,
            hidden_counts: &hidden_counts,
        };
        let guess = policy.next_guess(&view, rng).ok_or(GameError::NoGuess)?;
        let index = letter_index(guess).ok_or(GameError::InvalidGuess(guess))?;
        if !guessed.insert(guess) {
            return Err(GameError::RepeatedGuess(char::from(guess)));
        }
        guesses += 1;

        let revealed = hidden_counts[index];
        if revealed == 0 {
            attempts_left -= 1;
            continue;
        }
        for (slot, &letter) in mask.iter_mut().zip(word) {
            if letter == guess {
                *slot = guess;
            }
        }
        unknown -= revealed as usize;
        hidden_counts[index] = 0;
    }

    let outcome = if unknown == 0 {
        GameOutcome::Win
    } else {
        GameOutcome::Loss
    };
    Ok(GameReport {
        outcome,
        attempts_left,
        guesses,
        mask: String::from_utf8_lossy(&mask).into_owned(),
    })
}

/// One game with a fresh policy state built from `kind`.
pub fn play(
    target: &str,
    kind: PolicyKind,
    attempts_budget: u32,
    rng: &mut Rng,
) -> Result<GameOutcome, GameError> {
    let mut policy = kind.start_game();
    simulate(target, attempts_budget, &mut policy, rng).map(|report| report.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::policy::ScriptedPolicy;

    #[test]
    fn repeated_letters_are_revealed_together() {
        let mut policy = ScriptedPolicy::new(b"pale".to_vec());
        let report = simulate("apple", 6, &mut policy, &mut Rng::new(0)).expect("valid game");
        assert_eq!(report.outcome, GameOutcome::Win);
        assert_eq!(report.guesses, 4);
        assert_eq!(report.mask, "apple");
    }

    #[test]
    fn loss_keeps_partial_mask() {
        let mut policy = ScriptedPolicy::new(b"pbcdfg".to_vec());
        let report = simulate("apple", 5, &mut policy, &mut Rng::new(0)).expect("valid game");
        assert_eq!(report.outcome, GameOutcome::Loss);
        assert_eq!(report.attempts_left, 0);
        assert_eq!(report.mask, "_pp__");
    }

    #[test]
    fn zero_budget_loses_without_guessing() {
        let mut policy = ScriptedPolicy::default();
        let report = simulate("kiwi", 0, &mut policy, &mut Rng::new(0)).expect("valid game");
        assert_eq!(report.outcome, GameOutcome::Loss);
        assert_eq!(report.guesses, 0);
    }

    #[test]
    fn policy_violations_are_errors() {
        let mut rng = Rng::new(0);
        let mut repeat = ScriptedPolicy::new(b"xx".to_vec());
        assert_eq!(
            simulate("kiwi", 6, &mut repeat, &mut rng),
            Err(GameError::RepeatedGuess('x'))
        );
        let mut upper = ScriptedPolicy::new(b"K".to_vec());
        assert_eq!(
            simulate("kiwi", 6, &mut upper, &mut rng),
            Err(GameError::InvalidGuess(b'K'))
        );
        let mut dry = ScriptedPolicy::new(b"k".to_vec());
        assert_eq!(simulate("kiwi", 6, &mut dry, &mut rng), Err(GameError::NoGuess));
    }

    #[test]
    fn invalid_targets_are_rejected() {
        let mut rng = Rng::new(0);
        assert!(matches!(
            play("", PolicyKind::Uniform, 6, &mut rng),
            Err(GameError::InvalidTarget(_))
        ));
        assert!(matches!(
            play("Apple", PolicyKind::Uniform, 6, &mut rng),
            Err(GameError::InvalidTarget(_))
        ));
    }
}
