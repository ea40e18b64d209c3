//! Property-based tests for the reasoning state machine

use super::event::ChainEvent;
use super::reply::NextAction;
use super::state::ChainState;
use super::transition::{transition, STEP_CAP};
use proptest::prelude::*;

fn arb_next_action() -> impl Strategy<Value = NextAction> {
    prop_oneof![
        4 => Just(NextAction::Continue),
        1 => Just(NextAction::FinalAnswer),
    ]
}

fn arb_event() -> impl Strategy<Value = ChainEvent> {
    prop_oneof![
        arb_next_action().prop_map(|next_action| ChainEvent::StepCompleted { next_action }),
        Just(ChainEvent::FinalAnswerReceived),
    ]
}

fn arb_state() -> impl Strategy<Value = ChainState> {
    prop_oneof![
        (1u32..40).prop_map(|step| ChainState::Running { step }),
        Just(ChainState::Finalizing),
        Just(ChainState::Terminated),
    ]
}

/// Feed step results until the machine leaves `Running`; returns steps run
fn drive(actions: &[NextAction]) -> (u32, ChainState) {
    let mut state = ChainState::initial();
    let mut steps = 0;
    let mut actions = actions.iter().copied().chain(std::iter::repeat(NextAction::Continue));
    while let ChainState::Running { .. } = state {
        steps += 1;
        let next_action = actions.next().unwrap_or(NextAction::Continue);
        state = transition(state, ChainEvent::StepCompleted { next_action }).unwrap();
    }
    (steps, state)
}

proptest! {
    #[test]
    fn prop_running_always_reaches_finalizing(actions in proptest::collection::vec(arb_next_action(), 0..60)) {
        let (steps, state) = drive(&actions);
        prop_assert_eq!(state, ChainState::Finalizing);
        prop_assert!(steps >= 1);
        prop_assert!(steps <= STEP_CAP + 1);
    }

    #[test]
    fn prop_stops_at_first_final_answer(actions in proptest::collection::vec(arb_next_action(), 0..60)) {
        let (steps, _) = drive(&actions);
        let first_final = actions
            .iter()
            .position(|a| *a == NextAction::FinalAnswer)
            .and_then(|i| u32::try_from(i + 1).ok());
        let expected = match first_final {
            Some(n) if n <= STEP_CAP + 1 => n,
            _ => STEP_CAP + 1,
        };
        prop_assert_eq!(steps, expected);
    }

    #[test]
    fn prop_step_numbers_strictly_increase(actions in proptest::collection::vec(Just(NextAction::Continue), 1..30)) {
        let mut state = ChainState::initial();
        let mut last = 0;
        for next_action in actions {
            if let ChainState::Running { step } = state {
                prop_assert!(step > last);
                last = step;
                state = transition(state, ChainEvent::StepCompleted { next_action }).unwrap();
            }
        }
    }

    #[test]
    fn prop_terminated_accepts_nothing(event in arb_event()) {
        prop_assert!(transition(ChainState::Terminated, event).is_err());
    }

    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), event in arb_event()) {
        prop_assert_eq!(transition(state, event), transition(state, event));
    }
}
