//! Reasoning chain orchestration
//!
//! A session bootstraps a conversation, asks the model for one step at a
//! time until it signals `final_answer` or the step cap trips, then asks
//! for the final answer. Every call goes through the retrying
//! [`StepGateway`]; every result lands in the [`StepLedger`].

mod conversation;
mod event;
mod gateway;
mod ledger;
mod prompt;
mod reply;
mod state;
mod transition;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod testing;

pub use ledger::{ChainOutcome, StepLedger, StepRecord};

use conversation::Conversation;
use event::ChainEvent;
use gateway::StepGateway;
use prompt::FINAL_ANSWER_REQUEST;
use reply::{NextAction, RequestKind};
use state::ChainState;
use transition::{transition, TransitionError, STEP_CAP};

use crate::llm::LlmService;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Output budget for an intermediate step
pub const STEP_MAX_TOKENS: u32 = 300;

/// Output budget for the final answer
pub const FINAL_MAX_TOKENS: u32 = 200;

/// Failures that abort a session instead of becoming a step
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("reasoning session cancelled")]
    Cancelled,
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("failed to serialize step reply: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Drives one reasoning session against an injected model client
pub struct ReasoningChain {
    gateway: StepGateway,
    cancel: CancellationToken,
}

impl ReasoningChain {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self {
            gateway: StepGateway::new(llm),
            cancel: CancellationToken::new(),
        }
    }

    /// Stop before the next model call once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub async fn run(&self, query: &str) -> Result<ChainOutcome, ChainError> {
        let mut conversation = Conversation::bootstrap(query);
        let mut ledger = StepLedger::new();
        let mut state = ChainState::initial();

        loop {
            match state {
                ChainState::Running { step } => {
                    self.check_cancelled()?;

                    let start = Instant::now();
                    let reply = self
                        .gateway
                        .call_or_fallback(&conversation, STEP_MAX_TOKENS, RequestKind::Step)
                        .await;
                    let elapsed = start.elapsed();

                    tracing::info!(
                        step,
                        title = %reply.title,
                        next_action = ?reply.next_action,
                        thinking_ms = %elapsed.as_millis(),
                        "Reasoning step completed"
                    );

                    ledger.append(StepRecord::step(step, &reply, elapsed));
                    conversation.push_assistant(serde_json::to_string(&reply)?);

                    let next_action = reply.next_action.unwrap_or(NextAction::FinalAnswer);
                    state = transition(state, ChainEvent::StepCompleted { next_action })?;

                    if next_action == NextAction::Continue && state == ChainState::Finalizing {
                        tracing::warn!(step, cap = STEP_CAP, "Step cap reached, finalizing");
                    }
                }
                ChainState::Finalizing => {
                    self.check_cancelled()?;
                    conversation.push_user(FINAL_ANSWER_REQUEST);

                    let start = Instant::now();
                    let reply = self
                        .gateway
                        .call_or_fallback(
                            &conversation,
                            FINAL_MAX_TOKENS,
                            RequestKind::FinalAnswer,
                        )
                        .await;
                    let elapsed = start.elapsed();

                    ledger.append(StepRecord::final_answer(reply.content, elapsed));
                    state = transition(state, ChainEvent::FinalAnswerReceived)?;
                }
                ChainState::Terminated => break,
            }
        }

        tracing::info!(
            steps = ledger.steps().len(),
            total_ms = %ledger.total().as_millis(),
            "Reasoning session complete"
        );

        Ok(ledger.into_outcome())
    }

    fn check_cancelled(&self) -> Result<(), ChainError> {
        if self.cancel.is_cancelled() {
            tracing::info!("Reasoning session cancelled at step boundary");
            return Err(ChainError::Cancelled);
        }
        Ok(())
    }
}
