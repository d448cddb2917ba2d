//! # Gate Events
//!
//! Emitted in call order and drained with `MintGate::take_events`.
//! Serialized with an `event` tag:
//!
//! ```json
//! {"event":"Minted","minter":"0x…","token_id":7}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Hash, TokenId, U256};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum MintEvent {
    /// One token issued through the allowlist or public path.
    Minted { minter: Address, token_id: TokenId },
    /// One token issued in exchange for a capability unit.
    ExternalChannelMinted { minter: Address, token_id: TokenId },
    Deposited { from: Address, amount: U256 },
    Withdrawn { to: Address, amount: U256 },
    MerkleRootSet { root: Hash },
    OwnershipTransferred { previous: Address, new: Address },
    PublicMintToggled { active: bool },
    PublicPriceChanged { price: U256 },
    WhitelistEndChanged { end_time: u64 },
    CapabilityTokenSet { token: Address },
}

impl MintEvent {
    /// Token id for issuance events.
    pub fn token_id(&self) -> Option<TokenId> {
        match self {
            Self::Minted { token_id, .. } | Self::ExternalChannelMinted { token_id, .. } => {
                Some(*token_id)
            }
            _ => None,
        }
    }
}
