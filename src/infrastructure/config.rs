//! Application configuration

use std::env;

use anyhow::Result;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the OpenAI-compatible chat-completions API
    pub openai_base_url: String,
    /// Model requested for narration
    pub openai_model: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The API key itself is not configuration: its presence or absence
    /// selects the narration strategy and is resolved by the CLI.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        })
    }
}
