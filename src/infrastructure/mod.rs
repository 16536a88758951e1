//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - OpenAI: HTTP adapter for the remote narration backend
//! - CLI: interactive read loop and character creation
//! - Config: application configuration

pub mod cli;
pub mod config;
pub mod openai;
