//! Pure state transition function
//!
//! The loop controller performs all I/O; this only decides what comes next.

use super::event::ChainEvent;
use super::reply::NextAction;
use super::state::ChainState;
use thiserror::Error;

/// Highest step number that may still be followed by another step.
///
/// The check is `step > STEP_CAP`, so step 26 runs before the cap trips.
pub const STEP_CAP: u32 = 25;

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Invalid transition: {event:?} in state {state:?}")]
    InvalidTransition { state: ChainState, event: ChainEvent },
}

pub fn transition(state: ChainState, event: ChainEvent) -> Result<ChainState, TransitionError> {
    match (state, event) {
        (
            ChainState::Running { .. },
            ChainEvent::StepCompleted {
                next_action: NextAction::FinalAnswer,
            },
        ) => Ok(ChainState::Finalizing),

        (
            ChainState::Running { step },
            ChainEvent::StepCompleted {
                next_action: NextAction::Continue,
            },
        ) if step > STEP_CAP => Ok(ChainState::Finalizing),

        (
            ChainState::Running { step },
            ChainEvent::StepCompleted {
                next_action: NextAction::Continue,
            },
        ) => Ok(ChainState::Running { step: step + 1 }),

        (ChainState::Finalizing, ChainEvent::FinalAnswerReceived) => Ok(ChainState::Terminated),

        (state, event) => Err(TransitionError::InvalidTransition { state, event }),
    }
}
