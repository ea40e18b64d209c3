//! LLM provider abstraction
//!
//! The reasoning chain only needs one capability from a provider: send a
//! conversation and get text back. Everything provider-specific lives
//! behind [`LlmService`].

mod error;
mod factory;
mod openai;
mod types;

pub use error::LlmError;
#[cfg(test)]
pub use error::LlmErrorKind;
pub use factory::{ClientFactory, Credentials, OpenAIClientFactory};
pub use openai::OpenAIService;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for LLM providers
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Make a completion request
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Logging wrapper for LLM services
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    messages = request.messages.len(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
                    "LLM request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = ?e.kind,
                    "LLM request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testing::MockLlmService;

    fn request() -> LlmRequest {
        LlmRequest {
            messages: vec![LlmMessage::user("hi")],
            max_tokens: Some(10),
            temperature: None,
        }
    }

    #[tokio::test]
    async fn test_logging_service_passes_response_through() {
        let mock = Arc::new(MockLlmService::new());
        mock.queue_text("hello");
        let logged = LoggingService::new(mock.clone());

        let response = logged.complete(&request()).await.unwrap();

        assert_eq!(response.text, "hello");
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
        assert_eq!(logged.model_id(), mock.model_id());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_logging_service_passes_error_through() {
        let mock = Arc::new(MockLlmService::new());
        mock.queue_error(LlmError::auth("bad key"));
        let logged = LoggingService::new(mock);

        let err = logged.complete(&request()).await.unwrap_err();

        assert_eq!(err.kind, LlmErrorKind::Auth);
        assert_eq!(err.message, "bad key");
    }
}
