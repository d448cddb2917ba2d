//! # Value Objects
//!
//! Small immutable types used throughout the mint gate.

use serde::{Deserialize, Serialize};

pub use shared_types::{Address, Hash, U256};

/// Sequential token identifier.
pub type TokenId = u64;

/// Denominator for royalty basis points (100% = 10 000).
pub const BASIS_POINTS_DENOMINATOR: u16 = 10_000;

/// Default royalty: 5%.
pub const DEFAULT_ROYALTY_BPS: u16 = 500;

/// The first token id issued when no offset is configured.
pub const DEFAULT_COUNTER_OFFSET: u64 = 1;

/// Sale phase, derived from the gate state and the current time.
///
/// Purely informational: each entry point evaluates its own guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No allowlist window has been configured yet.
    PreSale,
    /// `now` is before the allowlist deadline.
    WhitelistOpen,
    /// Allowlist window over, public sale not switched on.
    WhitelistClosedPublicInactive,
    /// Public sale switched on.
    PublicOpen,
    /// Every token has been issued.
    SoldOut,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PreSale => "pre-sale",
            Self::WhitelistOpen => "whitelist-open",
            Self::WhitelistClosedPublicInactive => "whitelist-closed",
            Self::PublicOpen => "public-open",
            Self::SoldOut => "sold-out",
        };
        f.write_str(name)
    }
}

/// Which entry point issued a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MintPath {
    Allowlist,
    Public,
    ExternalChannel,
}

/// Caller-supplied context for a single gate call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// Authenticated caller.
    pub caller: Address,
    /// Native value attached to the call (smallest unit).
    pub value: U256,
    /// Current time, seconds since the Unix epoch.
    pub timestamp: u64,
}

impl CallContext {
    /// A call with no attached value.
    #[must_use]
    pub fn new(caller: Address, timestamp: u64) -> Self {
        Self {
            caller,
            value: U256::zero(),
            timestamp,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<U256>) -> Self {
        self.value = value.into();
        self
    }
}

/// Outcome of a successful mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub minter: Address,
    pub path: MintPath,
    pub first_token_id: TokenId,
    pub amount: u64,
}

impl MintReceipt {
    /// The ids issued by this mint, in order.
    pub fn token_ids(&self) -> std::ops::Range<TokenId> {
        self.first_token_id..self.first_token_id + self.amount
    }
}
