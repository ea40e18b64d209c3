//! Structured replies from the model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Title of a synthesized reply after the gateway gives up
pub const ERROR_TITLE: &str = "Error";

/// Which kind of call the gateway is making
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// One intermediate reasoning step; the reply must carry `next_action`
    Step,
    /// The closing request; only `content` is required
    FinalAnswer,
}

impl RequestKind {
    fn failure_subject(self) -> &'static str {
        match self {
            RequestKind::Step => "step",
            RequestKind::FinalAnswer => "final answer",
        }
    }
}

/// Model's decision after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    FinalAnswer,
    Continue,
}

impl NextAction {
    /// Only the exact string `final_answer` ends the chain. Any other value,
    /// `null` and non-strings included, keeps it going.
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("final_answer") => NextAction::FinalAnswer,
            _ => NextAction::Continue,
        }
    }
}

/// A parsed model reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReply {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,
}

#[derive(Debug, Deserialize)]
struct StepWire {
    #[serde(deserialize_with = "lenient_text")]
    title: String,
    #[serde(deserialize_with = "lenient_text")]
    content: String,
    #[serde(deserialize_with = "lenient_next_action")]
    next_action: NextAction,
}

#[derive(Debug, Deserialize)]
struct FinalWire {
    #[serde(default, deserialize_with = "lenient_text")]
    title: String,
    #[serde(deserialize_with = "lenient_text")]
    content: String,
}

/// Strings pass through; any other JSON value is kept as its JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

fn lenient_next_action<'de, D>(deserializer: D) -> Result<NextAction, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| NextAction::from_value(&value))
}

/// Why a response body could not be used
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("response is not a JSON object")]
    NotObject,
    #[error("response is missing required fields: {0}")]
    Fields(#[source] serde_json::Error),
}

impl StepReply {
    /// Parse the model's text for the given request kind.
    pub fn parse(text: &str, kind: RequestKind) -> Result<Self, ReplyError> {
        let value: Value = serde_json::from_str(text).map_err(ReplyError::NotJson)?;
        if !value.is_object() {
            return Err(ReplyError::NotObject);
        }

        match kind {
            RequestKind::Step => {
                let wire: StepWire = serde_json::from_value(value).map_err(ReplyError::Fields)?;
                Ok(Self {
                    title: wire.title,
                    content: wire.content,
                    next_action: Some(wire.next_action),
                })
            }
            RequestKind::FinalAnswer => {
                let wire: FinalWire = serde_json::from_value(value).map_err(ReplyError::Fields)?;
                Ok(Self {
                    title: wire.title,
                    content: wire.content,
                    next_action: None,
                })
            }
        }
    }

    /// Reply standing in for a call that failed every attempt.
    ///
    /// A failed step forces finalization; a failed final answer has no
    /// continuation at all.
    pub fn fallback(kind: RequestKind, attempts: u32, error: &dyn fmt::Display) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            content: format!(
                "Failed to generate {} after {attempts} attempts. Error: {error}",
                kind.failure_subject()
            ),
            next_action: match kind {
                RequestKind::Step => Some(NextAction::FinalAnswer),
                RequestKind::FinalAnswer => None,
            },
        }
    }
}
