//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::lang::Direction;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::MenuChoice),
        Just(ConvState::AwaitingText),
        Just(ConvState::TutorialMenuChoice),
        Just(ConvState::TutorialAwaitingText),
    ]
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::OROMO_TO_ENGLISH),
        Just(Direction::ENGLISH_TO_OROMO),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Start),
        Just(Command::Restart),
        Just(Command::Help),
        Just(Command::History),
        arb_direction().prop_map(Command::Choose),
        "(om|or|en|fr) (om|or|en|xx) [a-zA-Z ]{0,12}".prop_map(|args| Command::Translate { args }),
        "[a-z]{1,8}".prop_map(Command::Unknown),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        arb_direction().prop_map(Direction::label),
        "(om|en|fr|xx) ?(->|→|>) ?(om|en|fr|xx)",
        "[a-zA-Z ]{1,30}",
    ]
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        arb_command().prop_map(Input::Command),
        arb_text().prop_map(Input::Text),
    ]
}

/// A session's pending pair is set exactly while it is capturing text
fn pending_consistent(state: ConvState, pending: Option<Direction>) -> bool {
    state.is_capturing_text() == pending.is_some()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: same inputs, same outputs
    #[test]
    fn prop_transition_is_deterministic(
        state in arb_state(),
        pending in proptest::option::of(arb_direction()),
        input in arb_input(),
    ) {
        let first = transition(&state, pending, input.clone());
        let second = transition(&state, pending, input);
        prop_assert_eq!(first, second);
    }

    // Invariant 2: starting from a fresh session, the pending pair tracks the
    // capture states through any sequence of inputs
    #[test]
    fn prop_pending_tracks_capture_states(inputs in proptest::collection::vec(arb_input(), 0..30)) {
        let mut state = ConvState::default();
        let mut pending = None;
        for input in inputs {
            let result = transition(&state, pending, input);
            state = result.new_state;
            pending = result.pending;
            prop_assert!(pending_consistent(state, pending), "{:?} with {:?}", state, pending);
        }
    }

    // Invariant 3: every transition that translates lands on the plain menu
    #[test]
    fn prop_translation_returns_to_menu(
        state in arb_state(),
        pending in proptest::option::of(arb_direction()),
        input in arb_input(),
    ) {
        let result = transition(&state, pending, input);
        let translates = result.effects.iter().any(|e| matches!(e, Effect::Translate { .. }));
        if translates {
            prop_assert_eq!(result.new_state, ConvState::MenuChoice);
            prop_assert_eq!(result.pending, None);
            prop_assert_eq!(result.effects.len(), 1);
        }
    }

    // Invariant 4: every transition says something to the user
    #[test]
    fn prop_every_input_gets_a_response(
        state in arb_state(),
        pending in proptest::option::of(arb_direction()),
        input in arb_input(),
    ) {
        let result = transition(&state, pending, input);
        prop_assert!(!result.effects.is_empty());
    }

    // Invariant 5: the only way to stay in a capture state on plain text is
    // blank input
    #[test]
    fn prop_capture_self_loop_only_on_blank(
        direction in arb_direction(),
        text in arb_text(),
    ) {
        for state in [ConvState::AwaitingText, ConvState::TutorialAwaitingText] {
            let result = transition(&state, Some(direction), Input::Text(text.clone()));
            if text.trim().is_empty() {
                prop_assert_eq!(result.new_state, state);
            } else {
                prop_assert_eq!(result.new_state, ConvState::MenuChoice);
            }
        }
    }

    // Invariant 6: a tutorial state is only reachable through /help or from
    // another tutorial state
    #[test]
    fn prop_tutorial_entered_only_via_help(
        state in arb_state(),
        pending in proptest::option::of(arb_direction()),
        input in arb_input(),
    ) {
        let is_help = input == Input::Command(Command::Help);
        let result = transition(&state, pending, input);
        if result.new_state.is_tutorial() && !state.is_tutorial() {
            prop_assert!(is_help);
        }
    }
}
