//! # Ports Layer
//!
//! - **Inbound** (`MintGateApi`): the entry points callers drive
//! - **Outbound** (`CapabilityToken`, `PayoutSink`): external systems the gate calls

pub mod inbound;
pub mod outbound;

pub use inbound::MintGateApi;
pub use outbound::{CapabilityToken, PayoutSink};
