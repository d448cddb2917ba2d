//! # Outbound Ports
//!
//! The only two external calls the gate makes. Both happen after every
//! guard has passed and before any gate state changes.

use crate::domain::{Address, U256};
use crate::errors::{PayoutError, TokenError};

/// Fungible token whose units grant external-channel mints.
pub trait CapabilityToken {
    /// The token contract's address.
    fn address(&self) -> Address;

    fn balance_of(&self, owner: &Address) -> U256;

    fn allowance(&self, owner: &Address, spender: &Address) -> U256;

    /// Move `amount` from `from` to `to`, spending `spender`'s allowance.
    ///
    /// Must leave balances and allowances untouched on error.
    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError>;
}

/// Native-currency destination for withdrawals.
pub trait PayoutSink {
    /// Credit `amount` to `to`. Must leave no partial credit on error.
    fn credit(&mut self, to: &Address, amount: U256) -> Result<(), PayoutError>;
}
