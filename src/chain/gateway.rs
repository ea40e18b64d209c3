//! Bounded-retry call gateway
//!
//! Wraps a single model call with a fixed number of attempts and a flat
//! backoff. Failures never escape: after the last attempt the caller gets
//! an explicit [`CallOutcome::Exhausted`] it can turn into a fallback reply.

use super::conversation::Conversation;
use super::reply::{ReplyError, RequestKind, StepReply};
use crate::llm::{LlmError, LlmRequest, LlmService};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Attempts per call, including the first
pub const MAX_ATTEMPTS: u32 = 3;

/// Delay between attempts. Flat, never scaled by attempt number.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Sampling temperature for every call
pub const TEMPERATURE: f32 = 0.2;

/// Failure of a single attempt
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Reply(#[from] ReplyError),
}

impl GatewayError {
    /// Whether another attempt could plausibly succeed. A malformed body
    /// counts, since the next sample may well be valid JSON.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Llm(e) => e.kind.is_transient(),
            GatewayError::Reply(_) => true,
        }
    }
}

/// Result of a gateway call
#[derive(Debug)]
pub enum CallOutcome {
    Reply(StepReply),
    Exhausted { attempts: u32, error: GatewayError },
}

impl CallOutcome {
    /// The parsed reply, or the synthesized fallback for an exhausted call
    pub fn into_reply(self, kind: RequestKind) -> StepReply {
        match self {
            CallOutcome::Reply(reply) => reply,
            CallOutcome::Exhausted { attempts, error } => {
                StepReply::fallback(kind, attempts, &error)
            }
        }
    }
}

/// Sends the running conversation to the model and parses the reply
#[derive(Clone)]
pub struct StepGateway {
    llm: Arc<dyn LlmService>,
}

impl StepGateway {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    pub async fn call(
        &self,
        conversation: &Conversation,
        max_tokens: u32,
        kind: RequestKind,
    ) -> CallOutcome {
        let request = conversation.to_request(max_tokens, TEMPERATURE);
        let mut attempt = 1;

        loop {
            match self.attempt(&request, kind).await {
                Ok(reply) => {
                    if attempt > 1 {
                        tracing::info!(attempt, ?kind, "Model call succeeded after retry");
                    }
                    return CallOutcome::Reply(reply);
                }
                Err(error) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        attempt,
                        max_attempts = MAX_ATTEMPTS,
                        ?kind,
                        transient = error.is_transient(),
                        error = %error,
                        "Model call failed, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF).await;
                    attempt += 1;
                }
                Err(error) => {
                    tracing::error!(
                        attempts = attempt,
                        ?kind,
                        error = %error,
                        "Model call failed on every attempt"
                    );
                    return CallOutcome::Exhausted {
                        attempts: attempt,
                        error,
                    };
                }
            }
        }
    }

    /// [`Self::call`] with the fallback already applied
    pub async fn call_or_fallback(
        &self,
        conversation: &Conversation,
        max_tokens: u32,
        kind: RequestKind,
    ) -> StepReply {
        self.call(conversation, max_tokens, kind)
            .await
            .into_reply(kind)
    }

    async fn attempt(
        &self,
        request: &LlmRequest,
        kind: RequestKind,
    ) -> Result<StepReply, GatewayError> {
        let response = self.llm.complete(request).await?;
        Ok(StepReply::parse(&response.text, kind)?)
    }
}
