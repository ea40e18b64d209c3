//! Session boundary
//!
//! Validates the four user-supplied inputs, builds a client for them and
//! runs one reasoning chain. Whatever happens, the caller gets a
//! [`SessionResponse`] back rather than an error.

use crate::chain::{ChainOutcome, ReasoningChain};
use crate::llm::{ClientFactory, Credentials};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

/// User input for one reasoning session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReasoningForm {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_base: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub query: String,
}

/// Missing input, reported before any session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your OpenAI API key and base URL to proceed.")]
    MissingCredentials,
    #[error("Please enter a model name to proceed.")]
    MissingModel,
    #[error("Please enter a query to get started.")]
    MissingQuery,
}

impl ReasoningForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if is_blank(&self.api_key) || is_blank(&self.api_base) {
            return Err(ValidationError::MissingCredentials);
        }
        if is_blank(&self.model) {
            return Err(ValidationError::MissingModel);
        }
        if is_blank(&self.query) {
            return Err(ValidationError::MissingQuery);
        }
        Ok(Credentials {
            api_key: self.api_key.clone(),
            api_base: self.api_base.clone(),
            model: self.model.clone(),
        })
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// What the front end receives for a submission
#[derive(Debug)]
pub enum SessionResponse {
    /// Input rejected; no session was created
    Invalid(ValidationError),
    Completed(ChainOutcome),
    /// The session failed outright
    Failed(String),
}

fn failure(error: impl std::fmt::Display) -> SessionResponse {
    SessionResponse::Failed(format!("An error occurred: {error}"))
}

/// Validate `form` and run one reasoning session.
///
/// The session runs on its own task so that even a panic inside it
/// surfaces as [`SessionResponse::Failed`].
pub async fn run_session(
    form: ReasoningForm,
    factory: Arc<dyn ClientFactory>,
    cancel: CancellationToken,
) -> SessionResponse {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected reasoning form");
            return SessionResponse::Invalid(e);
        }
    };

    let span = tracing::info_span!(
        "reasoning_session",
        session_id = %Uuid::new_v4(),
        model = %credentials.model
    );

    let task = tokio::spawn(
        async move {
            let llm = match factory.build(&credentials) {
                Ok(llm) => llm,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to build LLM client");
                    return failure(e);
                }
            };

            tracing::info!("Starting reasoning session");
            match ReasoningChain::new(llm)
                .with_cancellation(cancel)
                .run(&form.query)
                .await
            {
                Ok(outcome) => SessionResponse::Completed(outcome),
                Err(e) => {
                    tracing::error!(error = %e, "Reasoning session failed");
                    failure(e)
                }
            }
        }
        .instrument(span),
    );

    match task.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Reasoning session task aborted");
            failure(e)
        }
    }
}
