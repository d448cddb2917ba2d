//! # Domain Invariants
//!
//! Checks that must hold after every call, successful or not.
//!
//! | ID | Invariant |
//! |----|-----------|
//! | INVARIANT-1 | Supply ceiling: `counter <= max_supply + offset` |
//! | INVARIANT-2 | Wallet cap: every allowlist tally `<= max_per_wallet` |
//! | INVARIANT-3 | Ledger consistency: issued tokens `== counter - offset` |

use super::entities::{MintState, SaleConfig, TokenLedger};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: the counter never passes the supply ceiling.
pub fn check_supply_invariant(config: &SaleConfig, state: &MintState) -> bool {
    state.counter() <= config.supply_ceiling()
}

/// INVARIANT-2: no wallet exceeds its allowlist cap.
pub fn check_wallet_cap_invariant(config: &SaleConfig, state: &MintState) -> bool {
    state
        .wallets()
        .all(|(_, minted)| *minted <= config.max_per_wallet)
}

/// INVARIANT-3: the ledger holds exactly the tokens the counter says were issued.
pub fn check_ledger_invariant(state: &MintState, ledger: &TokenLedger) -> bool {
    ledger.total_supply() == state.total_minted()
}

/// Run every check.
pub fn check_all_invariants(
    config: &SaleConfig,
    state: &MintState,
    ledger: &TokenLedger,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_supply_invariant(config, state) {
        violations.push(InvariantViolation::SupplyExceeded {
            counter: state.counter(),
            ceiling: config.supply_ceiling(),
        });
    }

    if !check_wallet_cap_invariant(config, state) {
        let worst = state.wallets().map(|(_, m)| *m).max().unwrap_or(0);
        violations.push(InvariantViolation::WalletCapExceeded {
            minted: worst,
            max: config.max_per_wallet,
        });
    }

    if !check_ledger_invariant(state, ledger) {
        violations.push(InvariantViolation::LedgerMismatch {
            issued: ledger.total_supply(),
            counted: state.total_minted(),
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    SupplyExceeded { counter: u64, ceiling: u64 },
    WalletCapExceeded { minted: u64, max: u64 },
    LedgerMismatch { issued: u64, counted: u64 },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SupplyExceeded { counter, ceiling } => {
                write!(f, "supply exceeded: counter {counter} > ceiling {ceiling}")
            }
            Self::WalletCapExceeded { minted, max } => {
                write!(f, "wallet cap exceeded: {minted} > {max}")
            }
            Self::LedgerMismatch { issued, counted } => {
                write!(f, "ledger mismatch: {issued} issued, counter says {counted}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
