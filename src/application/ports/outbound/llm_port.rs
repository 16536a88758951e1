//! LLM port - interface for text-generation backends

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single message in a chat-style exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// A request to a text-generation backend
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A response from a text-generation backend
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub model: String,
}

/// Outbound port for text generation.
///
/// Implemented by the OpenAI-compatible HTTP adapter in production and by
/// mock backends in tests. The port is opaque to callers beyond this
/// call/response contract; retry and timeout policy belong to the adapter's
/// caller, not here.
#[async_trait]
pub trait LlmPort: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a completion for the given request.
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error>;
}
