//! Ports - Interfaces at the application boundary

pub mod outbound;
