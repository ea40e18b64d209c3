//! Per-session client construction
//!
//! Every reasoning session brings its own key, base URL and model, so the
//! client is built at the session boundary instead of once at startup.

use super::{LlmError, LlmService, LoggingService, OpenAIService};
use std::sync::Arc;
use std::time::Duration;

/// Connection details supplied with a session
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

/// Builds the LLM client a session talks to
pub trait ClientFactory: Send + Sync {
    fn build(&self, credentials: &Credentials) -> Result<Arc<dyn LlmService>, LlmError>;
}

/// Factory producing logged `OpenAI`-compatible clients
#[derive(Debug, Clone)]
pub struct OpenAIClientFactory {
    timeout: Duration,
}

impl OpenAIClientFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ClientFactory for OpenAIClientFactory {
    fn build(&self, credentials: &Credentials) -> Result<Arc<dyn LlmService>, LlmError> {
        let service = OpenAIService::new(
            credentials.api_key.trim(),
            &credentials.api_base,
            credentials.model.trim(),
            self.timeout,
        )?;
        tracing::debug!(endpoint = %service.endpoint(), model = %credentials.model, "Built LLM client");
        Ok(Arc::new(LoggingService::new(Arc::new(service))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_logged_client_for_model() {
        let factory = OpenAIClientFactory::new(Duration::from_secs(1));
        let client = factory
            .build(&Credentials {
                api_key: "sk-test".to_string(),
                api_base: "http://localhost:1/v1".to_string(),
                model: " my-model ".to_string(),
            })
            .unwrap();
        assert_eq!(client.model_id(), "my-model");
    }
}
