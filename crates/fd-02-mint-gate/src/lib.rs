//! # Mint Gate Subsystem (fd-02)
//!
//! Phased token issuance. Eligible addresses mint during a time-boxed
//! allowlist window by presenting a Merkle proof against the root published
//! by fd-01. Anyone mints once the public sale is switched on. Holders of a
//! capability token can trade one unit for one token at any time.
//!
//! ## Phases
//!
//! ```text
//! PreSale ──set_end_date_whitelist──→ WhitelistOpen ──deadline──→ WhitelistClosedPublicInactive
//!                                           │                                │
//!                                           └──────set_is_public_mint_active──┴──→ PublicOpen
//!
//! any phase ──counter reaches max_supply + offset──→ SoldOut
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Supply Ceiling | `domain/invariants.rs` - `check_supply_invariant()` |
//! | INVARIANT-2 | Wallet Cap | `domain/invariants.rs` - `check_wallet_cap_invariant()` |
//! | INVARIANT-3 | Ledger Consistency | `domain/invariants.rs` - `check_ledger_invariant()` |
//! | INVARIANT-4 | Fail Closed | `service.rs` - guards run before any mutation |
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `CapabilityToken` | Consume one unit per external-channel mint |
//! | `PayoutSink` | Receive withdrawn balance |
//!
//! ## Usage Example
//!
//! ```ignore
//! use fd_02_mint_gate::prelude::*;
//!
//! let mut gate = MintGate::<InMemoryCapabilityToken>::new(owner, config)?;
//! let ctx = CallContext::new(minter, now).with_value(price * 2);
//! let receipt = gate.allowlist_mint(&ctx, 2, &proof)?;
//! ```

// Crate-level lints
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::adapters::{InMemoryBank, InMemoryCapabilityToken};
    pub use crate::domain::{
        Address, CallContext, Hash, MintPath, MintReceipt, Phase, SaleConfig, TokenId, U256,
    };
    pub use crate::errors::{ErrorCategory, MintError, PayoutError, TokenError};
    pub use crate::events::MintEvent;
    pub use crate::ports::{CapabilityToken, MintGateApi, PayoutSink};
    pub use crate::service::{MintGate, SharedMintGate};
}

pub use domain::{
    check_all_invariants, evaluate_phase, royalty_amount, CallContext, InvariantCheckResult,
    MintPath, MintReceipt, MintState, Phase, SaleConfig, TokenLedger,
};
pub use errors::{ErrorCategory, MintError, PayoutError, TokenError};
pub use events::MintEvent;
pub use ports::{CapabilityToken, MintGateApi, PayoutSink};
pub use service::{MintGate, SharedMintGate};
