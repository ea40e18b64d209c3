//! API request and response types

use crate::chain::{ChainOutcome, StepRecord};
use serde::Serialize;

/// One step of a finished chain
#[derive(Debug, Serialize)]
pub struct StepView {
    pub title: String,
    pub content: String,
    pub thinking_time_secs: f64,
}

impl From<&StepRecord> for StepView {
    fn from(step: &StepRecord) -> Self {
        Self {
            title: step.title().to_string(),
            content: step.content().to_string(),
            thinking_time_secs: step.thinking_time_secs(),
        }
    }
}

/// Response for a completed reasoning session
#[derive(Debug, Serialize)]
pub struct ReasonResponse {
    pub steps: Vec<StepView>,
    pub total_thinking_time_secs: f64,
}

impl From<&ChainOutcome> for ReasonResponse {
    fn from(outcome: &ChainOutcome) -> Self {
        Self {
            steps: outcome.steps.iter().map(StepView::from).collect(),
            total_thinking_time_secs: outcome.total_thinking_time_secs(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
