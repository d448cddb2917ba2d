//! # In-Memory Bank
//!
//! Native-currency balances keyed by address. Addresses can be marked as
//! rejecting to simulate a payout destination that refuses funds.

use std::collections::{HashMap, HashSet};

use crate::domain::{Address, U256};
use crate::errors::PayoutError;
use crate::ports::PayoutSink;

#[derive(Clone, Debug, Default)]
pub struct InMemoryBank {
    balances: HashMap<Address, U256>,
    rejecting: HashSet<Address>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Make every future credit to `account` fail.
    pub fn reject(&mut self, account: Address) {
        self.rejecting.insert(account);
    }

    pub fn accept(&mut self, account: &Address) {
        self.rejecting.remove(account);
    }
}

impl PayoutSink for InMemoryBank {
    fn credit(&mut self, to: &Address, amount: U256) -> Result<(), PayoutError> {
        if to.is_zero() {
            return Err(PayoutError::ZeroAddress);
        }
        if self.rejecting.contains(to) {
            return Err(PayoutError::Rejected {
                to: *to,
                reason: "receiver reverted".to_string(),
            });
        }

        let balance = self.balance_of(to);
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| PayoutError::Rejected {
                to: *to,
                reason: "balance overflow".to_string(),
            })?;
        self.balances.insert(*to, updated);
        Ok(())
    }
}
