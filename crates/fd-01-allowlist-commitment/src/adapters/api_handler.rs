//! # Proof Lookup API Handler
//!
//! JSON query adapter in front of [`CommitmentApi`]. This is the surface
//! minters hit to fetch the root and their proof.
//!
//! ## Architecture
//!
//! ```text
//! Minter / dApp → fd-admin serve → ApiQueryHandler → CommitmentApi
//! ```

use crate::domain::CommitmentError;
use crate::ports::CommitmentApi;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// Error from API query handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiQueryError {
    pub code: i32,
    pub message: String,
}

impl ApiQueryError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {}", method),
        }
    }

    pub fn invalid_params(msg: &str) -> Self {
        Self {
            code: -32602,
            message: msg.to_string(),
        }
    }

    /// A well-formed request that the domain rejected.
    pub fn domain(err: &CommitmentError) -> Self {
        Self {
            code: -32000,
            message: format!("{}: {}", err.code(), err),
        }
    }
}

impl std::fmt::Display for ApiQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiQueryError {}

/// Response for `getMerkleProof`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerkleProofResponse {
    pub address: Address,
    pub leaf: Hash,
    pub proof: Vec<Hash>,
    pub root: Hash,
}

/// JSON query handler for fd-01.
///
/// Handles:
/// - Health checks
/// - Root and proof lookups
/// - Proof verification and statistics
pub struct ApiQueryHandler<S> {
    service: S,
}

impl<S: CommitmentApi> ApiQueryHandler<S> {
    /// Create a new API handler.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Get mutable access to the service.
    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    /// Handle ping request (health check).
    pub fn handle_ping(&self) -> serde_json::Value {
        serde_json::json!({
            "status": "ok",
            "subsystem": "fd-01-allowlist-commitment"
        })
    }

    /// Handle getMerkleRoot.
    pub fn handle_get_root(&self) -> serde_json::Value {
        serde_json::json!({ "root": self.service.merkle_root() })
    }

    /// Handle getMerkleProof.
    pub fn handle_get_proof(
        &mut self,
        address: Address,
    ) -> Result<serde_json::Value, ApiQueryError> {
        let proof = self
            .service
            .generate_proof(&address)
            .map_err(|e| ApiQueryError::domain(&e))?;

        let response = MerkleProofResponse {
            address: proof.address,
            leaf: proof.leaf,
            proof: proof.siblings,
            root: proof.root,
        };
        serde_json::to_value(response)
            .map_err(|e| ApiQueryError::invalid_params(&e.to_string()))
    }

    /// Handle verifyMerkleProof.
    pub fn handle_verify(&mut self, address: Address, proof: &[Hash]) -> serde_json::Value {
        serde_json::json!({ "valid": self.service.verify_proof(&address, proof) })
    }

    /// Handle getStats.
    pub fn handle_get_stats(&self) -> serde_json::Value {
        serde_json::to_value(self.service.get_stats()).unwrap_or_default()
    }
}

/// Handle a JSON query.
///
/// ## Supported Methods
///
/// - `ping`: Health check
/// - `getMerkleRoot`: Committed root
/// - `getMerkleProof`: Proof for `params.address`
/// - `verifyMerkleProof`: Check `params.proof` for `params.address`
/// - `getStats`: Lookup statistics
pub fn handle_api_query<S: CommitmentApi>(
    handler: &mut ApiQueryHandler<S>,
    method: &str,
    params: &serde_json::Value,
) -> Result<serde_json::Value, ApiQueryError> {
    match method {
        "ping" => Ok(handler.handle_ping()),
        "getMerkleRoot" => Ok(handler.handle_get_root()),
        "getMerkleProof" => {
            let address = parse_address_param(params, "address")?;
            handler.handle_get_proof(address)
        }
        "verifyMerkleProof" => {
            let address = parse_address_param(params, "address")?;
            let proof = parse_proof_param(params, "proof")?;
            Ok(handler.handle_verify(address, &proof))
        }
        "getStats" => Ok(handler.handle_get_stats()),
        _ => Err(ApiQueryError::method_not_found(method)),
    }
}

/// Parse an address parameter from JSON params.
fn parse_address_param(params: &serde_json::Value, name: &str) -> Result<Address, ApiQueryError> {
    let hex_str = params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiQueryError::invalid_params(&format!("Missing {} parameter", name)))?;

    Address::from_hex(hex_str).map_err(|e| ApiQueryError::invalid_params(&e.to_string()))
}

/// Parse a proof (array of hex hashes) from JSON params.
fn parse_proof_param(params: &serde_json::Value, name: &str) -> Result<Vec<Hash>, ApiQueryError> {
    let items = params
        .get(name)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ApiQueryError::invalid_params(&format!("Missing {} parameter", name)))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| ApiQueryError::invalid_params("Proof entries must be strings"))
                .and_then(|s| {
                    Hash::from_hex(s).map_err(|e| ApiQueryError::invalid_params(&e.to_string()))
                })
        })
        .collect()
}
