//! Append-only conversation history

use super::prompt::{ASSISTANT_ACKNOWLEDGMENT, SYSTEM_PROMPT};
use crate::llm::{LlmMessage, LlmRequest};

/// Messages exchanged during one reasoning session.
///
/// Entries are only ever appended; the model sees its earlier steps
/// verbatim on every call.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<LlmMessage>,
}

impl Conversation {
    /// System instruction, the user's query and the scripted acknowledgment.
    pub fn bootstrap(query: &str) -> Self {
        Self {
            messages: vec![
                LlmMessage::system(SYSTEM_PROMPT),
                LlmMessage::user(query),
                LlmMessage::assistant(ASSISTANT_ACKNOWLEDGMENT),
            ],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(LlmMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(LlmMessage::assistant(content));
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[LlmMessage] {
        &self.messages
    }

    /// Snapshot the history into a request with the given generation limits
    pub fn to_request(&self, max_tokens: u32, temperature: f32) -> LlmRequest {
        LlmRequest {
            messages: self.messages.clone(),
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_bootstrap_has_three_entries() {
        let conv = Conversation::bootstrap("How many r's in strawberry?");
        let roles: Vec<_> = conv.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::System, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(conv.messages()[1].content, "How many r's in strawberry?");
        assert!(conv.messages()[0].content.contains("next_action"));
    }

    #[test]
    fn test_appends_preserve_order() {
        let mut conv = Conversation::bootstrap("q");
        conv.push_assistant("{\"title\":\"a\"}");
        conv.push_user("more");
        assert_eq!(conv.messages().len(), 5);
        assert_eq!(conv.messages()[3].role, MessageRole::Assistant);
        assert_eq!(conv.messages()[4].content, "more");
    }

    #[test]
    fn test_request_carries_limits() {
        let conv = Conversation::bootstrap("q");
        let request = conv.to_request(300, 0.2);
        assert_eq!(request.max_tokens, Some(300));
        assert_eq!(request.messages.len(), 3);
        assert!(request.temperature.is_some());
    }
}
