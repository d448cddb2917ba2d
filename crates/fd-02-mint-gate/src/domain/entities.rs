//! # Domain Entities
//!
//! Sale configuration and the mutable state owned by one gate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value_objects::{
    Address, Hash, TokenId, BASIS_POINTS_DENOMINATOR, DEFAULT_COUNTER_OFFSET,
    DEFAULT_ROYALTY_BPS, U256,
};
use crate::errors::MintError;

// =============================================================================
// SALE CONFIG
// =============================================================================

/// Static sale parameters plus the owner-adjustable knobs.
///
/// Loaded from JSON by the admin CLI. Missing fields take their
/// [`Default`] value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleConfig {
    /// Allowlist commitment. `Hash::ZERO` means "not committed yet".
    pub merkle_root: Hash,
    pub max_supply: u64,
    pub whitelist_price: U256,
    pub public_price: U256,
    pub max_per_wallet: u64,
    /// Absolute allowlist deadline. `0` means the window was never opened.
    pub whitelist_end_time: u64,
    pub is_public_mint_active: bool,
    /// Address of the capability token backing the external channel.
    pub capability_token: Option<Address>,
    /// The gate's own address; receives capability units and royalties.
    pub gate_address: Address,
    /// Destination of `withdraw`.
    pub payout_address: Address,
    pub royalty_bps: u16,
    /// Id of the first token issued.
    pub counter_offset: u64,
}

impl Default for SaleConfig {
    fn default() -> Self {
        Self {
            merkle_root: Hash::ZERO,
            max_supply: 3_333,
            // 0.05 and 0.08 of the native unit (18 decimals)
            whitelist_price: U256::from(50_000_000_000_000_000u64),
            public_price: U256::from(80_000_000_000_000_000u64),
            max_per_wallet: 2,
            whitelist_end_time: 0,
            is_public_mint_active: false,
            capability_token: None,
            gate_address: Address::ZERO,
            payout_address: Address::ZERO,
            royalty_bps: DEFAULT_ROYALTY_BPS,
            counter_offset: DEFAULT_COUNTER_OFFSET,
        }
    }
}

impl SaleConfig {
    /// Small supply and round prices for tests.
    pub fn for_testing() -> Self {
        Self {
            max_supply: 10,
            whitelist_price: U256::from(100),
            public_price: U256::from(200),
            max_per_wallet: 2,
            gate_address: Address::new([0x6a; 20]),
            payout_address: Address::new([0x5b; 20]),
            ..Self::default()
        }
    }

    /// Check the parameters are internally consistent.
    pub fn validate(&self) -> Result<(), MintError> {
        let invalid = |reason: &str| MintError::InvalidConfig {
            reason: reason.to_string(),
        };

        if self.royalty_bps > BASIS_POINTS_DENOMINATOR {
            return Err(invalid("royalty_bps exceeds 10000"));
        }
        if self.payout_address.is_zero() {
            return Err(invalid("payout_address is the zero address"));
        }
        if self.gate_address.is_zero() {
            return Err(invalid("gate_address is the zero address"));
        }
        if self.max_supply.checked_add(self.counter_offset).is_none() {
            return Err(invalid("max_supply + counter_offset overflows"));
        }
        if self.capability_token.is_some() {
            return Err(invalid(
                "capability_token is attached with set_capability_token",
            ));
        }
        Ok(())
    }

    /// Counter value at which the sale is sold out.
    pub fn supply_ceiling(&self) -> u64 {
        self.max_supply.saturating_add(self.counter_offset)
    }
}

// =============================================================================
// MINT STATE
// =============================================================================

/// Issuance counter and per-wallet allowlist tally.
///
/// The counter only moves forward, one step per token issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MintState {
    counter: u64,
    offset: u64,
    per_wallet: HashMap<Address, u64>,
}

impl MintState {
    pub fn new(offset: u64) -> Self {
        Self {
            counter: offset,
            offset,
            per_wallet: HashMap::new(),
        }
    }

    /// Id the next issued token will receive.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn total_minted(&self) -> u64 {
        self.counter - self.offset
    }

    /// Tokens this wallet has taken through the allowlist path.
    pub fn minted_by(&self, wallet: &Address) -> u64 {
        self.per_wallet.get(wallet).copied().unwrap_or(0)
    }

    pub(crate) fn wallets(&self) -> impl Iterator<Item = (&Address, &u64)> {
        self.per_wallet.iter()
    }

    pub(crate) fn advance(&mut self, amount: u64) {
        self.counter += amount;
    }

    pub(crate) fn record_wallet(&mut self, wallet: Address, amount: u64) {
        *self.per_wallet.entry(wallet).or_insert(0) += amount;
    }
}

// =============================================================================
// TOKEN LEDGER
// =============================================================================

/// Ownership records for issued tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenLedger {
    owners: HashMap<TokenId, Address>,
    balances: HashMap<Address, u64>,
}

impl TokenLedger {
    pub fn owner_of(&self, token_id: TokenId) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }

    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u64 {
        self.owners.len() as u64
    }

    pub(crate) fn issue(&mut self, to: Address, token_id: TokenId) {
        self.owners.insert(token_id, to);
        *self.balances.entry(to).or_insert(0) += 1;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_once_addresses_are_set() {
        let config = SaleConfig::default();
        assert!(config.validate().is_err());

        let config = SaleConfig {
            payout_address: Address::new([1; 20]),
            gate_address: Address::new([2; 20]),
            ..SaleConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.royalty_bps, 500);
        assert_eq!(config.counter_offset, 1);
    }

    #[test]
    fn test_validate_rejects_royalty_over_100_percent() {
        let config = SaleConfig {
            royalty_bps: 10_001,
            ..SaleConfig::for_testing()
        };
        assert_eq!(config.validate().unwrap_err().code(), "InvalidConfig");
    }

    #[test]
    fn test_validate_rejects_zero_gate_address() {
        let config = SaleConfig {
            payout_address: Address::new([1; 20]),
            ..SaleConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MintError::InvalidConfig {
                reason: "gate_address is the zero address".into()
            })
        );
    }

    #[test]
    fn test_validate_rejects_supply_overflow() {
        let config = SaleConfig {
            max_supply: u64::MAX,
            ..SaleConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_defaults_missing_fields() {
        let json = r#"{
            "max_supply": 5,
            "public_price": "0x64",
            "payout_address": "0x5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b5b",
            "gate_address": "0x6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a6a"
        }"#;
        let config: SaleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_supply, 5);
        assert_eq!(config.public_price, U256::from(100));
        assert_eq!(config.max_per_wallet, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mint_state_counts_from_offset() {
        let mut state = MintState::new(1);
        assert_eq!(state.counter(), 1);
        state.advance(3);
        state.record_wallet(Address::new([9; 20]), 2);
        assert_eq!(state.counter(), 4);
        assert_eq!(state.total_minted(), 3);
        assert_eq!(state.minted_by(&Address::new([9; 20])), 2);
        assert_eq!(state.minted_by(&Address::ZERO), 0);
    }

    #[test]
    fn test_ledger_issue() {
        let mut ledger = TokenLedger::default();
        let owner = Address::new([3; 20]);
        ledger.issue(owner, 1);
        ledger.issue(owner, 2);
        assert_eq!(ledger.owner_of(2), Some(owner));
        assert_eq!(ledger.owner_of(3), None);
        assert_eq!(ledger.balance_of(&owner), 2);
        assert_eq!(ledger.total_supply(), 2);
    }
}
