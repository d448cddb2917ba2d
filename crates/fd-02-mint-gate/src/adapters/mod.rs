//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports, used by the admin CLI
//! simulation and by tests.

pub mod bank;
pub mod capability_token;

pub use bank::InMemoryBank;
pub use capability_token::InMemoryCapabilityToken;
