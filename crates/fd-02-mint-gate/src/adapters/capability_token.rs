//! # In-Memory Capability Token
//!
//! ERC-20-like ledger with allowances.

use std::collections::HashMap;

use crate::domain::{Address, U256};
use crate::errors::TokenError;
use crate::ports::CapabilityToken;

#[derive(Clone, Debug, Default)]
pub struct InMemoryCapabilityToken {
    address: Address,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl InMemoryCapabilityToken {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// Create `amount` new units for `to`.
    pub fn mint(&mut self, to: Address, amount: impl Into<U256>) {
        let balance = self.balances.entry(to).or_default();
        *balance = balance.saturating_add(amount.into());
    }

    /// Let `spender` move up to `amount` of `owner`'s units.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: impl Into<U256>) {
        self.allowances.insert((owner, spender), amount.into());
    }
}

impl CapabilityToken for InMemoryCapabilityToken {
    fn address(&self) -> Address {
        self.address
    }

    fn balance_of(&self, owner: &Address) -> U256 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::ZeroRecipient);
        }

        let allowance = self.allowance(from, spender);
        if allowance < amount {
            return Err(TokenError::InsufficientAllowance {
                owner: *from,
                spender: *spender,
                allowance,
                required: amount,
            });
        }

        let balance = self.balance_of(from);
        if balance < amount {
            return Err(TokenError::InsufficientBalance {
                owner: *from,
                balance,
                required: amount,
            });
        }

        self.allowances.insert((*from, *spender), allowance - amount);
        self.balances.insert(*from, balance - amount);
        let credited = self.balances.entry(*to).or_default();
        *credited = credited.saturating_add(amount);
        Ok(())
    }
}
