//! Mock LLM service for reasoning-chain tests

use crate::llm::{ClientFactory, Credentials, LlmError, LlmRequest, LlmResponse, LlmService};
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock LLM service that returns queued responses
pub struct MockLlmService {
    responses: Mutex<VecDeque<Result<LlmResponse, LlmError>>>,
    /// Returned once the queue is empty
    fallback: Option<String>,
    /// Record of all requests made
    pub requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlmService {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer every unqueued call with the same text
    pub fn repeating(text: impl Into<String>) -> Self {
        Self {
            fallback: Some(text.into()),
            ..Self::new()
        }
    }

    pub fn queue_text(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(LlmResponse::from_text(text)));
    }

    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let queued = self.responses.lock().unwrap().pop_front();
        match (queued, &self.fallback) {
            (Some(result), _) => result,
            (None, Some(text)) => Ok(LlmResponse::from_text(text.clone())),
            (None, None) => Err(LlmError::network("No mock response queued")),
        }
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

/// Client factory handing out one shared mock
pub struct MockClientFactory {
    llm: Arc<MockLlmService>,
    builds: AtomicUsize,
    failure: Option<LlmError>,
}

impl MockClientFactory {
    pub fn new(llm: Arc<MockLlmService>) -> Self {
        Self {
            llm,
            builds: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Factory whose every build fails with `error`
    pub fn failing(error: LlmError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Arc::new(MockLlmService::new()))
        }
    }

    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl ClientFactory for MockClientFactory {
    fn build(&self, _credentials: &Credentials) -> Result<Arc<dyn LlmService>, LlmError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.llm.clone())
    }
}

/// JSON body of an intermediate step reply
pub fn step_json(title: &str, content: &str, next_action: &str) -> String {
    json!({ "title": title, "content": content, "next_action": next_action }).to_string()
}

/// JSON body of a final answer reply
pub fn final_json(content: &str) -> String {
    json!({ "title": "Final Answer", "content": content }).to_string()
}
