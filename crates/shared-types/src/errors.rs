//! # Error Types
//!
//! Errors raised while decoding the hex wire encoding of addresses and hashes.

use thiserror::Error;

/// Failure to decode a fixed-width `0x`-prefixed hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// Input did not start with `0x`/`0X`.
    #[error("{what} must be 0x-prefixed: {input:?}")]
    MissingPrefix { what: &'static str, input: String },

    /// Input had the wrong number of hex digits.
    #[error("invalid {what} length: expected {expected} hex chars, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input contained non-hex characters.
    #[error("invalid hex in {what}: {reason}")]
    InvalidHex { what: &'static str, reason: String },
}

/// Decode `0x`-prefixed hex into exactly `N` bytes. Digits are case-insensitive.
pub(crate) fn decode_fixed<const N: usize>(
    input: &str,
    what: &'static str,
) -> Result<[u8; N], HexParseError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| HexParseError::MissingPrefix {
            what,
            input: input.to_string(),
        })?;

    if digits.len() != N * 2 {
        return Err(HexParseError::InvalidLength {
            what,
            expected: N * 2,
            actual: digits.len(),
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|e| HexParseError::InvalidHex {
        what,
        reason: e.to_string(),
    })?;
    Ok(out)
}
