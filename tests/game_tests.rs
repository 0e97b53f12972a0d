use hangman_scaling::config::{ATTEMPTS_BUDGET, FRUIT_WORDS};
use hangman_scaling::game::{
    play, simulate, GameError, GameOutcome, PolicyKind, Rng, ScriptedPolicy, MASK_SENTINEL,
};

#[test]
fn cat_with_all_correct_guesses_wins_without_losing_attempts() {
    let mut policy = ScriptedPolicy::new(b"cat".to_vec());
    let report = simulate("cat", 6, &mut policy, &mut Rng::new(0)).expect("valid game");

    assert_eq!(report.outcome, GameOutcome::Win);
    assert_eq!(report.attempts_left, 6);
    assert_eq!(report.guesses, 3);
    assert_eq!(report.mask, "cat");
}

#[test]
fn cat_with_six_wrong_guesses_loses_with_no_attempts_left() {
    let mut policy = ScriptedPolicy::new(b"xyzqwe".to_vec());
    let report = simulate("cat", 6, &mut policy, &mut Rng::new(0)).expect("valid game");

    assert_eq!(report.outcome, GameOutcome::Loss);
    assert_eq!(report.attempts_left, 0);
    assert_eq!(report.guesses, 6);
    assert_eq!(report.mask, "___");
}

#[test]
fn game_stops_as_soon_as_word_is_revealed() {
    // Trailing letters are never asked for.
    let mut policy = ScriptedPolicy::new(b"xcatzzz".to_vec());
    let report = simulate("cat", 6, &mut policy, &mut Rng::new(0)).expect("valid game");
    assert_eq!(report.outcome, GameOutcome::Win);
    assert_eq!(report.attempts_left, 5);
    assert_eq!(report.guesses, 4);
}

#[test]
fn reference_policies_finish_every_fruit_within_alphabet() {
    let policies = [PolicyKind::Uniform, PolicyKind::frequency_weighted()];
    for seed in 0..200u64 {
        let mut rng = Rng::new(seed);
        for word in FRUIT_WORDS {
            for kind in policies {
                let mut policy = kind.start_game();
                let report =
                    simulate(word, ATTEMPTS_BUDGET, &mut policy, &mut rng).expect("valid game");
                assert!(report.guesses <= 26, "{word}: {} guesses", report.guesses);
                let revealed = !report.mask.bytes().any(|b| b == MASK_SENTINEL);
                assert_eq!(report.outcome.is_win(), revealed, "{word}: {report:?}");
                assert_eq!(report.outcome.is_win(), report.mask == word);
            }
        }
    }
}

#[test]
fn frequency_policy_wins_more_often_than_uniform() {
    let mut rng = Rng::new(2024);
    let games = 4000;
    let wins = |kind: PolicyKind, rng: &mut Rng| {
        (0..games)
            .filter(|_| play("apple", kind, ATTEMPTS_BUDGET, rng).expect("valid game").is_win())
            .count()
    };
    let uniform = wins(PolicyKind::Uniform, &mut rng);
    let frequency = wins(PolicyKind::frequency_weighted(), &mut rng);
    assert!(frequency > uniform, "frequency={frequency} uniform={uniform}");
}

#[test]
fn fresh_policy_state_per_game() {
    // Two games in a row with a deterministic policy see identical preferences.
    let kind = PolicyKind::FrequencyWeighted {
        random_probability: 0.0,
    };
    let mut rng = Rng::new(1);
    let mut first = kind.start_game();
    let a = simulate("kiwi", 6, &mut first, &mut rng).expect("valid game");
    let mut second = kind.start_game();
    let b = simulate("kiwi", 6, &mut second, &mut rng).expect("valid game");
    assert_eq!(a, b);
    assert_eq!(a.outcome, GameOutcome::Win);
}

#[test]
fn non_letter_targets_are_rejected() {
    let mut rng = Rng::new(0);
    assert_eq!(
        play("pear!", PolicyKind::Uniform, 6, &mut rng),
        Err(GameError::InvalidTarget("pear!".to_string()))
    );
}
