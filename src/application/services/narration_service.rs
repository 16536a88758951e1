//! Narration service - turn-by-turn scene narration
//!
//! The engine is assembled around exactly one narration strategy: a remote
//! text-generation backend or the local fallback generator. The choice is
//! made once at construction and never changes at runtime, so callers get
//! consistent latency and cost characteristics for the whole session.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest, MessageRole};
use crate::application::services::fallback_narrator::FallbackNarrator;
use crate::application::services::prompt_builder::build_scene_prompt;
use crate::domain::entities::SessionState;

/// Errors that can occur while narrating a turn
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    /// The remote backend failed (auth, network, malformed response).
    /// Propagated to the caller; never downgraded to fallback narration.
    #[error("narration backend error: {0}")]
    Backend(String),
}

/// One narration strategy: produce prose for a player action against the
/// live session state.
#[async_trait]
pub trait Narrator: Send {
    async fn narrate(
        &mut self,
        action: &str,
        state: &mut SessionState,
    ) -> Result<String, NarrationError>;
}

/// Strategy backed by a remote text-generation service.
///
/// Builds a structured prompt from the state snapshot and the verbatim
/// action, submits it with the configured persona as the system message,
/// and returns the backend's text unmodified. Does not advance the scene
/// counter; progression on this path is the backend's narrative concern.
pub struct RemoteNarrator<L: LlmPort> {
    backend: L,
    persona: String,
}

impl<L: LlmPort> RemoteNarrator<L> {
    pub fn new(backend: L, persona: impl Into<String>) -> Self {
        Self {
            backend,
            persona: persona.into(),
        }
    }
}

#[async_trait]
impl<L: LlmPort> Narrator for RemoteNarrator<L> {
    async fn narrate(
        &mut self,
        action: &str,
        state: &mut SessionState,
    ) -> Result<String, NarrationError> {
        let prompt = build_scene_prompt(action, &state.snapshot());

        let request = LlmRequest::new(vec![ChatMessage {
            role: MessageRole::User,
            content: prompt,
        }])
        .with_system_prompt(self.persona.clone())
        .with_temperature(0.7);

        let response = self
            .backend
            .generate(request)
            .await
            .map_err(|e| NarrationError::Backend(e.to_string()))?;

        tracing::debug!(model = %response.model, "remote narration received");
        Ok(response.content)
    }
}

/// Single entry point for turn narration.
///
/// Wraps whichever strategy was selected at assembly time; `narrate` is the
/// only per-call operation. The caller keeps ownership of the session state
/// and passes a mutable handle each turn.
pub struct NarrationEngine {
    narrator: Box<dyn Narrator>,
}

impl NarrationEngine {
    /// Assemble the engine: a present backend selects the remote strategy,
    /// an absent one the local fallback. The persona is only consulted on
    /// the remote path.
    pub fn new<L>(backend: Option<L>, persona: impl Into<String>) -> Self
    where
        L: LlmPort + 'static,
    {
        match backend {
            Some(client) => Self::remote(client, persona),
            None => Self::fallback(StdRng::from_entropy()),
        }
    }

    pub fn remote<L: LlmPort + 'static>(backend: L, persona: impl Into<String>) -> Self {
        Self {
            narrator: Box::new(RemoteNarrator::new(backend, persona)),
        }
    }

    pub fn fallback<R: rand::Rng + Send + 'static>(rng: R) -> Self {
        Self {
            narrator: Box::new(FallbackNarrator::new(rng)),
        }
    }

    /// Narrate one turn. `action` is assumed non-empty; the read loop
    /// rejects empty input before calling.
    pub async fn narrate(
        &mut self,
        action: &str,
        state: &mut SessionState,
    ) -> Result<String, NarrationError> {
        self.narrator.narrate(action, state).await
    }
}
