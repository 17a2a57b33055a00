//! Property-based tests for the round state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated targets, guesses and inputs.

use numguess::core::{
    new_round, reset, submit_guess, Feedback, FeedbackKind, GameState, Target, TargetSource,
};
use numguess::effects::{FixedTargets, GameRng};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_target()(value in 1..=100u8) -> Target {
        Target::new(value).unwrap()
    }
}

prop_compose! {
    fn target_and_miss()(target in 1..=100u8, guess in 1..=100u8) -> (Target, u8) {
        let guess = if guess == target { guess % 100 + 1 } else { guess };
        (Target::new(target).unwrap(), guess)
    }
}

fn invalid_input() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,8}",
        (-1000i64..=0).prop_map(|n| n.to_string()),
        (101i64..100_000).prop_map(|n| n.to_string()),
        (1u8..=99, 1u8..=9).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ]
}

fn won_round(target: Target) -> GameState {
    let (state, _) = GameState::new(target).submit(&target.value().to_string());
    state
}

proptest! {
    #[test]
    fn miss_appends_and_points_toward_target((target, guess) in target_and_miss()) {
        let start = GameState::new(target);
        let (state, feedback) = submit_guess(&start, &guess.to_string());

        prop_assert_eq!(state.attempts(), 1);
        prop_assert_eq!(state.guesses(), vec![guess]);
        prop_assert!(!state.is_over());

        let expected = if guess < target.value() {
            Feedback::too_low()
        } else {
            Feedback::too_high()
        };
        prop_assert_eq!(feedback, Some(expected));
    }

    #[test]
    fn hit_ends_round_with_success(target in arbitrary_target()) {
        let (state, feedback) = submit_guess(&GameState::new(target), &target.value().to_string());

        prop_assert!(state.is_over());
        prop_assert_eq!(feedback.map(|f| f.kind), Some(FeedbackKind::Success));
    }

    #[test]
    fn invalid_input_changes_nothing_but_message(
        target in arbitrary_target(),
        raw in invalid_input(),
    ) {
        let start = GameState::new(target);
        let (state, feedback) = submit_guess(&start, &raw);

        prop_assert_eq!(feedback, Some(Feedback::invalid_guess()));
        prop_assert_eq!(state.attempts(), 0);
        prop_assert_eq!(state.history(), start.history());
        prop_assert!(!state.is_over());
        prop_assert_eq!(state.target(), start.target());
    }

    #[test]
    fn history_length_tracks_attempts(
        target in arbitrary_target(),
        inputs in prop::collection::vec(
            prop_oneof![(1u8..=100).prop_map(|n| n.to_string()), invalid_input()],
            0..30,
        ),
    ) {
        let mut state = GameState::new(target);
        for raw in &inputs {
            let (next, _) = state.submit(raw);
            state = next;
            prop_assert_eq!(state.history().len(), state.attempts());
            prop_assert_eq!(state.guesses().len(), state.attempts());
        }
    }

    #[test]
    fn success_iff_guess_matched(
        target in arbitrary_target(),
        guesses in prop::collection::vec(1u8..=100, 1..20),
    ) {
        let mut state = GameState::new(target);
        for guess in guesses {
            let (next, feedback) = state.submit(&guess.to_string());
            if let Some(feedback) = feedback {
                prop_assert_eq!(feedback.is_success(), guess == target.value());
            }
            state = next;
        }
    }

    #[test]
    fn submissions_after_win_are_idempotent(
        target in arbitrary_target(),
        inputs in prop::collection::vec(any::<String>(), 1..10),
    ) {
        let won = won_round(target);
        let mut state = won.clone();
        for raw in &inputs {
            let (next, feedback) = state.submit(raw);
            prop_assert!(feedback.is_none());
            prop_assert_eq!(&next, &won);
            state = next;
        }
    }

    #[test]
    fn reset_always_starts_clean(seed in any::<u64>(), rounds in 1usize..50) {
        let mut rng = GameRng::new(seed);
        let mut state = new_round(&mut rng);
        for _ in 0..rounds {
            let (played, _) = state.submit("50");
            state = reset(&mut rng);
            prop_assert_eq!(state.attempts(), 0);
            prop_assert!(state.guesses().is_empty());
            prop_assert!(!state.is_over());
            prop_assert!(state.last_feedback().is_none());
            prop_assert!((1..=100).contains(&state.target().value()));
            prop_assert_ne!(state.round_id(), played.round_id());
        }
    }

    #[test]
    fn fixed_source_is_honoured(target in arbitrary_target()) {
        let mut source = FixedTargets::single(target);
        prop_assert_eq!(source.next_target(), target);
        prop_assert_eq!(new_round(&mut source).target(), target);
    }

    #[test]
    fn state_roundtrip_serialization(
        target in arbitrary_target(),
        guesses in prop::collection::vec(1u8..=100, 0..10),
    ) {
        let mut state = GameState::new(target);
        for guess in guesses {
            state = state.submit(&guess.to_string()).0;
        }

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
