//! Domain entities - Core business objects with identity

mod character;
mod session;

pub use character::{Character, DomainError};
pub use session::SessionState;
