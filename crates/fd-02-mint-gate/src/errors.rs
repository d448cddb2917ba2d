//! # Mint Gate Errors
//!
//! Every rejected entry point returns a [`MintError`] and leaves the gate
//! untouched. [`MintError::code`] is the stable identifier tooling keys off.

use serde::Serialize;
use shared_types::{Address, U256};
use thiserror::Error;

// =============================================================================
// MINT ERRORS
// =============================================================================

/// Errors returned by the mint gate entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MintError {
    /// Proof does not place the caller in the committed allowlist.
    #[error("caller {caller} is not whitelisted")]
    NotWhitelisted { caller: Address },

    /// The allowlist window has closed (or was never opened).
    #[error("whitelist mint ended: now {now} >= end {end}")]
    WhitelistMintEnded { now: u64, end: u64 },

    /// The public sale flag is off.
    #[error("public mint is not active")]
    PublicMintNotActive,

    /// The allowlist mint would take the wallet over its cap.
    #[error("max mint exceeded for {wallet}: minted {minted} + requested {requested} > {max}")]
    MaxMintExceeded {
        wallet: Address,
        minted: u64,
        requested: u64,
        max: u64,
    },

    /// Not enough supply left for the request.
    #[error("sold out: requested {requested}, remaining {remaining}")]
    SoldOut { requested: u64, remaining: u64 },

    /// Attached value differs from `price * amount`.
    ///
    /// `expected` is `None` when the product overflows, in which case no
    /// attached value can match.
    #[error("inexact payment: expected {}, received {received}", display_expected(.expected))]
    InexactPayment {
        expected: Option<U256>,
        received: U256,
    },

    /// Caller is not the gate owner.
    #[error("caller {caller} is not the owner")]
    NotOwner { caller: Address },

    /// The capability token refused to move a unit from the caller.
    #[error("capability transfer not approved for {caller}: {source}")]
    NotApproved {
        caller: Address,
        #[source]
        source: TokenError,
    },

    /// Requested amount was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// No capability token has been set.
    #[error("external channel not configured")]
    ExternalChannelNotConfigured,

    /// A root was committed at construction and cannot be replaced.
    #[error("merkle root already set")]
    RootAlreadySet,

    /// Ownership cannot move to the zero address.
    #[error("invalid owner: zero address")]
    InvalidOwner,

    /// The sale configuration is inconsistent.
    #[error("invalid sale config: {reason}")]
    InvalidConfig { reason: String },

    /// Crediting the payment would overflow the gate balance.
    #[error("balance overflow: {balance} + {value}")]
    BalanceOverflow { balance: U256, value: U256 },

    /// The payout destination refused the credit.
    #[error("payout failed: {0}")]
    PayoutFailed(#[from] PayoutError),
}

fn display_expected(expected: &Option<U256>) -> String {
    match expected {
        Some(value) => value.to_string(),
        None => "overflow".to_string(),
    }
}

/// Coarse grouping of [`MintError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// Caller is not (or no longer) eligible for this path.
    Eligibility,
    /// Supply, wallet or treasury capacity exhausted.
    Capacity,
    /// Attached value or payout problem.
    Payment,
    /// Caller lacks the required role or approval.
    Authorization,
    /// Gate configuration does not allow the call.
    Configuration,
}

impl MintError {
    /// Stable identifier for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotWhitelisted { .. } => "NotWhitelisted",
            Self::WhitelistMintEnded { .. } => "WhitelistMintEnded",
            Self::PublicMintNotActive => "PublicMintNotActive",
            Self::MaxMintExceeded { .. } => "MaxMintExceeded",
            Self::SoldOut { .. } => "SoldOut",
            Self::InexactPayment { .. } => "InexactPayment",
            Self::NotOwner { .. } => "NotOwner",
            Self::NotApproved { .. } => "NotApproved",
            Self::ZeroAmount => "ZeroAmount",
            Self::ExternalChannelNotConfigured => "ExternalChannelNotConfigured",
            Self::RootAlreadySet => "RootAlreadySet",
            Self::InvalidOwner => "InvalidOwner",
            Self::InvalidConfig { .. } => "InvalidConfig",
            Self::BalanceOverflow { .. } => "BalanceOverflow",
            Self::PayoutFailed(_) => "PayoutFailed",
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotWhitelisted { .. }
            | Self::WhitelistMintEnded { .. }
            | Self::PublicMintNotActive
            | Self::ZeroAmount => ErrorCategory::Eligibility,
            Self::MaxMintExceeded { .. }
            | Self::SoldOut { .. }
            | Self::BalanceOverflow { .. } => ErrorCategory::Capacity,
            Self::InexactPayment { .. } | Self::PayoutFailed(_) => ErrorCategory::Payment,
            Self::NotOwner { .. } | Self::NotApproved { .. } => ErrorCategory::Authorization,
            Self::ExternalChannelNotConfigured
            | Self::RootAlreadySet
            | Self::InvalidOwner
            | Self::InvalidConfig { .. } => ErrorCategory::Configuration,
        }
    }

    /// Returns true if the caller can recover by fixing the request or
    /// waiting for a phase. Capacity, authorization and configuration
    /// failures need someone else to act first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Eligibility | ErrorCategory::Payment
        )
    }
}

// =============================================================================
// PORT ERRORS
// =============================================================================

/// Errors from a [`CapabilityToken`](crate::ports::CapabilityToken).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("insufficient balance: {owner} holds {balance}, needs {required}")]
    InsufficientBalance {
        owner: Address,
        balance: U256,
        required: U256,
    },

    #[error("insufficient allowance: {owner} approved {allowance} for {spender}, needs {required}")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        allowance: U256,
        required: U256,
    },

    #[error("token transfer to the zero address")]
    ZeroRecipient,
}

/// Errors from a [`PayoutSink`](crate::ports::PayoutSink).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoutError {
    #[error("payout to the zero address")]
    ZeroAddress,

    #[error("payout rejected by {to}: {reason}")]
    Rejected { to: Address, reason: String },
}

// =============================================================================
// TESTS
// =============================================================================
