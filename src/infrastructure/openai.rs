//! OpenAI-compatible client for remote narration

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{LlmPort, LlmRequest, LlmResponse, MessageRole};

/// Client for an OpenAI-compatible chat-completions API
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    type Error = OpenAiError;

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, Self::Error> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system_prompt {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        for message in &request.messages {
            messages.push(WireMessage {
                role: role_name(message.role).to_string(),
                content: message.content.clone(),
            });
        }

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature.map(f64::from),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api(format!("{status}: {error_text}")));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyResponse)?;

        Ok(LlmResponse {
            content: choice.message.content,
            model: completion.model,
        })
    }
}

fn role_name(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("API returned no choices")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireMessage,
}
