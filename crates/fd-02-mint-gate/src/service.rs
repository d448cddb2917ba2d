//! # Mint Gate Service
//!
//! Owns the sale state and implements [`MintGateApi`].
//!
//! Every entry point runs its guards first and mutates nothing until all of
//! them pass. The one fallible external call per path (capability transfer
//! or payout credit) runs after the guards and before the infallible
//! [`MintGate::issue`] step, so a rejected call leaves no trace.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    check_all_invariants, evaluate_phase, remaining_supply, required_payment, royalty_amount,
    Address, CallContext, Hash, MintPath, MintReceipt, MintState, Phase, SaleConfig, TokenId,
    TokenLedger, U256,
};
use crate::errors::MintError;
use crate::events::MintEvent;
use crate::ports::{CapabilityToken, MintGateApi, PayoutSink};

/// Per-path parameters for the shared mint guards.
struct MintRequest {
    path: MintPath,
    amount: u64,
    unit_price: U256,
    wallet_cap: Option<u64>,
}

/// The mint gate.
///
/// Generic over the capability token backing the external channel.
#[derive(Debug)]
pub struct MintGate<T> {
    owner: Address,
    config: SaleConfig,
    state: MintState,
    ledger: TokenLedger,
    balance: U256,
    capability_token: Option<T>,
    events: Vec<MintEvent>,
}

impl<T: CapabilityToken> MintGate<T> {
    /// Deploy a gate.
    ///
    /// A non-zero `config.merkle_root` is committed permanently.
    pub fn new(owner: Address, config: SaleConfig) -> Result<Self, MintError> {
        if owner.is_zero() {
            return Err(MintError::InvalidOwner);
        }
        config.validate()?;

        info!(
            %owner,
            max_supply = config.max_supply,
            root_committed = !config.merkle_root.is_zero(),
            "[fd-02] Mint gate deployed"
        );

        Ok(Self {
            owner,
            state: MintState::new(config.counter_offset),
            config,
            ledger: TokenLedger::default(),
            balance: U256::zero(),
            capability_token: None,
            events: Vec::new(),
        })
    }

    /// Attach the capability token at deployment time.
    #[must_use]
    pub fn with_capability_token(mut self, token: T) -> Self {
        self.config.capability_token = Some(token.address());
        self.capability_token = Some(token);
        self
    }

    // =========================================================================
    // MINT PATHS
    // =========================================================================

    #[instrument(skip(self, proof), fields(caller = %ctx.caller))]
    fn try_allowlist_mint(
        &mut self,
        ctx: &CallContext,
        amount: u64,
        proof: &[Hash],
    ) -> Result<MintReceipt, MintError> {
        if amount == 0 {
            return Err(MintError::ZeroAmount);
        }
        if ctx.timestamp >= self.config.whitelist_end_time {
            return Err(MintError::WhitelistMintEnded {
                now: ctx.timestamp,
                end: self.config.whitelist_end_time,
            });
        }
        if !shared_types::verify(&self.config.merkle_root, &ctx.caller, proof) {
            return Err(MintError::NotWhitelisted { caller: ctx.caller });
        }

        let request = MintRequest {
            path: MintPath::Allowlist,
            amount,
            unit_price: self.config.whitelist_price,
            wallet_cap: Some(self.config.max_per_wallet),
        };
        let balance = self.check_mint(ctx, &request)?;
        Ok(self.issue(ctx, &request, balance))
    }

    #[instrument(skip(self), fields(caller = %ctx.caller))]
    fn try_public_mint(&mut self, ctx: &CallContext, amount: u64) -> Result<MintReceipt, MintError> {
        if amount == 0 {
            return Err(MintError::ZeroAmount);
        }
        if !self.config.is_public_mint_active {
            return Err(MintError::PublicMintNotActive);
        }

        let request = MintRequest {
            path: MintPath::Public,
            amount,
            unit_price: self.config.public_price,
            wallet_cap: None,
        };
        let balance = self.check_mint(ctx, &request)?;
        Ok(self.issue(ctx, &request, balance))
    }

    #[instrument(skip(self), fields(caller = %ctx.caller))]
    fn try_external_channel_mint(&mut self, ctx: &CallContext) -> Result<MintReceipt, MintError> {
        // the external channel is not payable
        let request = MintRequest {
            path: MintPath::ExternalChannel,
            amount: 1,
            unit_price: U256::zero(),
            wallet_cap: None,
        };
        let balance = self.check_mint(ctx, &request)?;

        let gate = self.config.gate_address;
        let token = self
            .capability_token
            .as_mut()
            .ok_or(MintError::ExternalChannelNotConfigured)?;
        token
            .transfer_from(&gate, &ctx.caller, &gate, U256::one())
            .map_err(|source| MintError::NotApproved {
                caller: ctx.caller,
                source,
            })?;

        Ok(self.issue(ctx, &request, balance))
    }

    /// Wallet cap, supply and payment guards, in that order.
    ///
    /// Returns the balance the gate will hold once the payment lands.
    fn check_mint(&self, ctx: &CallContext, request: &MintRequest) -> Result<U256, MintError> {
        if let Some(max) = request.wallet_cap {
            let minted = self.state.minted_by(&ctx.caller);
            if minted.saturating_add(request.amount) > max {
                return Err(MintError::MaxMintExceeded {
                    wallet: ctx.caller,
                    minted,
                    requested: request.amount,
                    max,
                });
            }
        }

        let remaining = remaining_supply(&self.config, &self.state);
        if request.amount > remaining {
            return Err(MintError::SoldOut {
                requested: request.amount,
                remaining,
            });
        }

        let expected = required_payment(request.unit_price, request.amount);
        if expected != Some(ctx.value) {
            return Err(MintError::InexactPayment {
                expected,
                received: ctx.value,
            });
        }

        self.credited_balance(ctx.value)
    }

    fn credited_balance(&self, value: U256) -> Result<U256, MintError> {
        self.balance
            .checked_add(value)
            .ok_or(MintError::BalanceOverflow {
                balance: self.balance,
                value,
            })
    }

    /// Issue `request.amount` sequential tokens to the caller.
    ///
    /// Only called once every guard has passed; cannot fail.
    fn issue(&mut self, ctx: &CallContext, request: &MintRequest, balance: U256) -> MintReceipt {
        let first_token_id = self.state.counter();

        for token_id in first_token_id..first_token_id + request.amount {
            self.ledger.issue(ctx.caller, token_id);
            self.events.push(match request.path {
                MintPath::ExternalChannel => MintEvent::ExternalChannelMinted {
                    minter: ctx.caller,
                    token_id,
                },
                MintPath::Allowlist | MintPath::Public => MintEvent::Minted {
                    minter: ctx.caller,
                    token_id,
                },
            });
        }

        self.state.advance(request.amount);
        if request.wallet_cap.is_some() {
            self.state.record_wallet(ctx.caller, request.amount);
        }
        self.balance = balance;

        debug_assert!(check_all_invariants(&self.config, &self.state, &self.ledger).is_valid());

        info!(
            minter = %ctx.caller,
            path = ?request.path,
            first_token_id,
            amount = request.amount,
            "[fd-02] Tokens issued"
        );

        MintReceipt {
            minter: ctx.caller,
            path: request.path,
            first_token_id,
            amount: request.amount,
        }
    }

    fn try_withdraw(
        &mut self,
        ctx: &CallContext,
        sink: &mut dyn PayoutSink,
    ) -> Result<U256, MintError> {
        self.ensure_owner(ctx)?;

        let amount = self.balance;
        let to = self.config.payout_address;
        sink.credit(&to, amount)?;

        self.balance = U256::zero();
        self.events.push(MintEvent::Withdrawn { to, amount });
        info!(%to, %amount, "[fd-02] Balance withdrawn");
        Ok(amount)
    }

    // =========================================================================
    // ADMINISTRATION
    // =========================================================================

    fn ensure_owner(&self, ctx: &CallContext) -> Result<(), MintError> {
        if ctx.caller != self.owner {
            warn!(caller = %ctx.caller, "[fd-02] Owner-only call rejected");
            return Err(MintError::NotOwner { caller: ctx.caller });
        }
        Ok(())
    }

    pub fn set_capability_token(&mut self, ctx: &CallContext, token: T) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        let address = token.address();
        self.config.capability_token = Some(address);
        self.capability_token = Some(token);
        self.events.push(MintEvent::CapabilityTokenSet { token: address });
        Ok(())
    }

    pub fn set_is_public_mint_active(
        &mut self,
        ctx: &CallContext,
        active: bool,
    ) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        self.config.is_public_mint_active = active;
        self.events.push(MintEvent::PublicMintToggled { active });
        info!(active, "[fd-02] Public mint toggled");
        Ok(())
    }

    pub fn set_public_mint_price(&mut self, ctx: &CallContext, price: U256) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        self.config.public_price = price;
        self.events.push(MintEvent::PublicPriceChanged { price });
        Ok(())
    }

    /// Open (or move) the allowlist window: it closes `duration` seconds
    /// after this call.
    pub fn set_end_date_whitelist(
        &mut self,
        ctx: &CallContext,
        duration: u64,
    ) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        let end_time = ctx.timestamp.saturating_add(duration);
        self.config.whitelist_end_time = end_time;
        self.events.push(MintEvent::WhitelistEndChanged { end_time });
        info!(end_time, "[fd-02] Whitelist deadline set");
        Ok(())
    }

    /// Commit the allowlist root. Allowed once, and only if no root was
    /// committed at deployment.
    pub fn set_merkle_root(&mut self, ctx: &CallContext, root: Hash) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        if !self.config.merkle_root.is_zero() {
            return Err(MintError::RootAlreadySet);
        }
        if root.is_zero() {
            return Err(MintError::InvalidConfig {
                reason: "merkle root is zero".to_string(),
            });
        }
        self.config.merkle_root = root;
        self.events.push(MintEvent::MerkleRootSet { root });
        info!(%root, "[fd-02] Merkle root committed");
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        ctx: &CallContext,
        new_owner: Address,
    ) -> Result<(), MintError> {
        self.ensure_owner(ctx)?;
        if new_owner.is_zero() {
            return Err(MintError::InvalidOwner);
        }
        let previous = std::mem::replace(&mut self.owner, new_owner);
        self.events.push(MintEvent::OwnershipTransferred {
            previous,
            new: new_owner,
        });
        Ok(())
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Id the next token will receive.
    pub fn mint_counter(&self) -> u64 {
        self.state.counter()
    }

    pub fn total_minted(&self) -> u64 {
        self.state.total_minted()
    }

    /// Tokens `wallet` has taken through the allowlist path.
    pub fn minted_by(&self, wallet: &Address) -> u64 {
        self.state.minted_by(wallet)
    }

    pub fn balance(&self) -> U256 {
        self.balance
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn owner_of(&self, token_id: TokenId) -> Option<Address> {
        self.ledger.owner_of(token_id)
    }

    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.ledger.balance_of(holder)
    }

    pub fn config(&self) -> &SaleConfig {
        &self.config
    }

    pub fn capability_token(&self) -> Option<&T> {
        self.capability_token.as_ref()
    }

    pub fn capability_token_mut(&mut self) -> Option<&mut T> {
        self.capability_token.as_mut()
    }

    /// Events emitted since the last [`take_events`](Self::take_events).
    ///
    /// The buffer grows until drained. Long-lived gates should call
    /// `take_events` after each batch of calls.
    pub fn events(&self) -> &[MintEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<MintEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<T: CapabilityToken> MintGateApi for MintGate<T> {
    fn allowlist_mint(
        &mut self,
        ctx: &CallContext,
        amount: u64,
        proof: &[Hash],
    ) -> Result<MintReceipt, MintError> {
        self.try_allowlist_mint(ctx, amount, proof)
            .inspect_err(|e| log_rejection(MintPath::Allowlist, ctx, e))
    }

    fn public_mint(&mut self, ctx: &CallContext, amount: u64) -> Result<MintReceipt, MintError> {
        self.try_public_mint(ctx, amount)
            .inspect_err(|e| log_rejection(MintPath::Public, ctx, e))
    }

    fn external_channel_mint(&mut self, ctx: &CallContext) -> Result<MintReceipt, MintError> {
        self.try_external_channel_mint(ctx)
            .inspect_err(|e| log_rejection(MintPath::ExternalChannel, ctx, e))
    }

    fn deposit(&mut self, ctx: &CallContext) -> Result<(), MintError> {
        if ctx.value.is_zero() {
            return Ok(());
        }
        self.balance = self
            .credited_balance(ctx.value)
            .inspect_err(|e| warn!(from = %ctx.caller, error = %e, "[fd-02] Deposit rejected"))?;
        self.events.push(MintEvent::Deposited {
            from: ctx.caller,
            amount: ctx.value,
        });
        debug!(from = %ctx.caller, amount = %ctx.value, "[fd-02] Deposit received");
        Ok(())
    }

    fn withdraw(
        &mut self,
        ctx: &CallContext,
        sink: &mut dyn PayoutSink,
    ) -> Result<U256, MintError> {
        self.try_withdraw(ctx, sink).inspect_err(|e| {
            warn!(caller = %ctx.caller, code = e.code(), error = %e, "[fd-02] Withdraw rejected");
        })
    }

    fn royalty_info(&self, _token_id: TokenId, sale_price: U256) -> (Address, U256) {
        (
            self.config.gate_address,
            royalty_amount(sale_price, self.config.royalty_bps),
        )
    }

    fn phase(&self, now: u64) -> Phase {
        evaluate_phase(&self.config, &self.state, now)
    }
}

fn log_rejection(path: MintPath, ctx: &CallContext, err: &MintError) {
    debug!(
        ?path,
        caller = %ctx.caller,
        code = err.code(),
        error = %err,
        "[fd-02] Mint rejected"
    );
}

// =============================================================================
// SHARED GATE
// =============================================================================

/// Thread-safe handle: serializes every call through one lock.
#[derive(Debug)]
pub struct SharedMintGate<T> {
    inner: Arc<Mutex<MintGate<T>>>,
}

impl<T> Clone for SharedMintGate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: CapabilityToken> SharedMintGate<T> {
    pub fn new(gate: MintGate<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gate)),
        }
    }

    /// Run `f` with exclusive access to the gate.
    pub fn with<R>(&self, f: impl FnOnce(&mut MintGate<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn allowlist_mint(
        &self,
        ctx: &CallContext,
        amount: u64,
        proof: &[Hash],
    ) -> Result<MintReceipt, MintError> {
        self.inner.lock().allowlist_mint(ctx, amount, proof)
    }

    pub fn public_mint(&self, ctx: &CallContext, amount: u64) -> Result<MintReceipt, MintError> {
        self.inner.lock().public_mint(ctx, amount)
    }

    pub fn external_channel_mint(&self, ctx: &CallContext) -> Result<MintReceipt, MintError> {
        self.inner.lock().external_channel_mint(ctx)
    }

    pub fn mint_counter(&self) -> u64 {
        self.inner.lock().mint_counter()
    }

    /// Drain the event buffer.
    pub fn take_events(&self) -> Vec<MintEvent> {
        self.inner.lock().take_events()
    }
}

// =============================================================================
// TESTS
// =============================================================================
