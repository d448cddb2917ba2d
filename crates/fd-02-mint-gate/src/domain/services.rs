//! # Domain Services
//!
//! Pure functions over the sale state. No I/O, no mutation.

use super::entities::{MintState, SaleConfig};
use super::value_objects::{Phase, BASIS_POINTS_DENOMINATOR, U256};

/// Derive the current phase.
///
/// Evaluated in priority order: sold out, allowlist window, public flag,
/// never configured, closed.
pub fn evaluate_phase(config: &SaleConfig, state: &MintState, now: u64) -> Phase {
    if remaining_supply(config, state) == 0 {
        Phase::SoldOut
    } else if now < config.whitelist_end_time {
        Phase::WhitelistOpen
    } else if config.is_public_mint_active {
        Phase::PublicOpen
    } else if config.whitelist_end_time == 0 {
        Phase::PreSale
    } else {
        Phase::WhitelistClosedPublicInactive
    }
}

/// Tokens still available.
pub fn remaining_supply(config: &SaleConfig, state: &MintState) -> u64 {
    config.supply_ceiling().saturating_sub(state.counter())
}

/// Exact value owed for `amount` tokens at `unit_price`.
///
/// `None` on overflow.
pub fn required_payment(unit_price: U256, amount: u64) -> Option<U256> {
    unit_price.checked_mul(U256::from(amount))
}

/// `sale_price * bps / 10_000`, rounded down, without intermediate overflow.
pub fn royalty_amount(sale_price: U256, bps: u16) -> U256 {
    let denominator = U256::from(BASIS_POINTS_DENOMINATOR);
    let bps = U256::from(bps);
    let (quotient, remainder) = sale_price.div_mod(denominator);
    // quotient * bps <= sale_price since bps <= denominator
    quotient * bps + remainder * bps / denominator
}
