//! Application services - Use case implementations

pub mod fallback_narrator;
pub mod narration_service;
pub mod prompt_builder;

pub use fallback_narrator::FallbackNarrator;
pub use narration_service::{NarrationEngine, NarrationError, Narrator, RemoteNarrator};
