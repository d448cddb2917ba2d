//! # Domain Layer
//!
//! Pure sale logic: configuration, counters, ledger, phase evaluation.

pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;

pub use entities::{MintState, SaleConfig, TokenLedger};
pub use invariants::{
    check_all_invariants, check_ledger_invariant, check_supply_invariant,
    check_wallet_cap_invariant, InvariantCheckResult, InvariantViolation,
};
pub use services::{evaluate_phase, remaining_supply, required_payment, royalty_amount};
pub use value_objects::{
    Address, CallContext, Hash, MintPath, MintReceipt, Phase, TokenId, U256,
    BASIS_POINTS_DENOMINATOR, DEFAULT_COUNTER_OFFSET, DEFAULT_ROYALTY_BPS,
};
