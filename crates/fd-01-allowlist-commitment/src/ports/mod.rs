//! # Ports Layer
//!
//! Hexagonal architecture ports (interfaces) for the Allowlist Commitment
//! subsystem.
//!
//! - **Driving Ports (Inbound)**: APIs consumed by adapters (query handler, CLI)
//! - **Driven Ports (Outbound)**: SPIs implemented by adapters (allowlist sources)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
