//! Events that drive the reasoning loop

use super::reply::NextAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainEvent {
    /// An intermediate step was recorded
    StepCompleted { next_action: NextAction },
    /// The final answer was recorded
    FinalAnswerReceived,
}
