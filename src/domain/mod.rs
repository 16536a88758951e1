//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character, SessionState
//! - Domain errors raised by entity operations

pub mod entities;
