//! # Domain Errors
//!
//! Error types for the Allowlist Commitment subsystem.

use shared_types::{Address, HexParseError};
use thiserror::Error;

/// Errors that can occur while building commitments or extracting proofs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    /// A tree needs at least one leaf.
    #[error("empty leaf set: a commitment needs at least one address")]
    EmptyLeafSet,

    /// The requested address is not a member of the leaf set.
    #[error("address not in allowlist: {address}")]
    KeyNotFound { address: Address },

    /// An allowlist entry could not be parsed as an address.
    #[error("invalid address {input:?}: {source}")]
    InvalidAddress {
        input: String,
        #[source]
        source: HexParseError,
    },

    /// The allowlist is larger than the configured bound.
    #[error("too many leaves: {count} > {max}")]
    TooManyLeaves { count: usize, max: usize },
}

impl CommitmentError {
    /// Stable identifier for logs and JSON error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyLeafSet => "EmptyLeafSet",
            Self::KeyNotFound { .. } => "KeyNotFound",
            Self::InvalidAddress { .. } => "InvalidAddress",
            Self::TooManyLeaves { .. } => "TooManyLeaves",
        }
    }
}
