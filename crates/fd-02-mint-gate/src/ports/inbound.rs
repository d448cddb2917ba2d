//! # Inbound Port
//!
//! Caller-facing entry points of the mint gate.

use crate::domain::{Address, CallContext, Hash, MintReceipt, Phase, TokenId, U256};
use crate::errors::MintError;
use crate::ports::PayoutSink;

/// The mint gate as seen by minters and the owner.
///
/// Every method that returns `Err` leaves the gate exactly as it was.
pub trait MintGateApi {
    /// Mint `amount` tokens during the allowlist window.
    fn allowlist_mint(
        &mut self,
        ctx: &CallContext,
        amount: u64,
        proof: &[Hash],
    ) -> Result<MintReceipt, MintError>;

    /// Mint `amount` tokens once the public sale is active.
    fn public_mint(&mut self, ctx: &CallContext, amount: u64) -> Result<MintReceipt, MintError>;

    /// Exchange one capability-token unit for one token.
    fn external_channel_mint(&mut self, ctx: &CallContext) -> Result<MintReceipt, MintError>;

    /// Accept plain native value. Rejected if the balance would overflow.
    fn deposit(&mut self, ctx: &CallContext) -> Result<(), MintError>;

    /// Send the whole balance to the payout address. Owner only.
    fn withdraw(
        &mut self,
        ctx: &CallContext,
        sink: &mut dyn PayoutSink,
    ) -> Result<U256, MintError>;

    /// Royalty receiver and amount for a secondary sale.
    fn royalty_info(&self, token_id: TokenId, sale_price: U256) -> (Address, U256);

    fn phase(&self, now: u64) -> Phase;
}
