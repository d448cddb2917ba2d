//! Subcommand implementations. Each returns the JSON it prints.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use fd_01_allowlist_commitment::{
    handle_api_query, ApiQueryHandler, CommitmentApi, CommitmentService,
};
use fd_02_mint_gate::prelude::*;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

pub fn root(service: &CommitmentService) -> Value {
    json!({
        "root": service.get_merkle_root(),
        "leaves": service.tree().leaf_count(),
        "depth": service.tree().depth(),
    })
}

pub fn proof(service: &mut CommitmentService, address: &str) -> Result<Value> {
    let proof = service
        .get_merkle_proof(address)
        .with_context(|| format!("no proof for {address}"))?;
    Ok(json!({
        "address": address,
        "root": service.get_merkle_root(),
        "proof": proof,
    }))
}

/// Check a proof without loading any allowlist.
pub fn verify(root: &str, address: &str, proof: &[String]) -> Result<Value> {
    let root = Hash::from_hex(root).context("bad --root")?;
    let address = Address::from_hex(address).context("bad --address")?;
    let siblings = proof
        .iter()
        .map(|s| Hash::from_hex(s))
        .collect::<Result<Vec<_>, _>>()
        .context("bad --proof entry")?;

    Ok(json!({ "valid": shared_types::verify(&root, &address, &siblings) }))
}

/// One query, as sent to `serve`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

pub fn query(
    handler: &mut ApiQueryHandler<CommitmentService>,
    method: &str,
    params: &Value,
) -> Value {
    match handle_api_query(handler, method, params) {
        Ok(result) => json!({ "result": result }),
        Err(error) => json!({ "error": error }),
    }
}

/// Answer newline-delimited JSON queries until `input` closes.
pub fn serve<R: BufRead, W: Write>(
    handler: &mut ApiQueryHandler<CommitmentService>,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut served = 0;
    for line in input.lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<QueryRequest>(&line) {
            Ok(request) => {
                debug!(method = %request.method, "Query received");
                query(handler, &request.method, &request.params)
            }
            Err(e) => {
                warn!(error = %e, "Malformed query");
                json!({ "error": { "code": -32700, "message": format!("Parse error: {e}") } })
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
        served += 1;
    }
    Ok(served)
}

/// Stand-in gate address for dry runs on a config that has none.
pub const SIMULATED_GATE: Address = Address::new([0xfd; 20]);

/// Dry-run a sale: deploy a gate on the committed root, let every member
/// mint their full allowance, then withdraw.
pub fn simulate(
    service: &mut CommitmentService,
    mut sale: SaleConfig,
    owner: Address,
    now: u64,
    window: u64,
) -> Result<Value> {
    sale.merkle_root = service.merkle_root();
    if sale.payout_address.is_zero() {
        sale.payout_address = owner;
    }
    if sale.gate_address.is_zero() {
        sale.gate_address = SIMULATED_GATE;
    }
    let per_wallet = sale.max_per_wallet;
    let price = sale.whitelist_price;

    let mut gate = MintGate::<InMemoryCapabilityToken>::new(owner, sale)?;
    let owner_ctx = CallContext::new(owner, now);
    gate.set_end_date_whitelist(&owner_ctx, window)?;

    let members: Vec<Address> = service.leaf_set().addresses().copied().collect();
    let mut rejected = Vec::new();
    for member in members {
        let proof = service.generate_proof(&member)?.siblings;
        let value = price
            .checked_mul(U256::from(per_wallet))
            .context("price overflow")?;
        let ctx = CallContext::new(member, now).with_value(value);

        if let Err(e) = gate.allowlist_mint(&ctx, per_wallet, &proof) {
            rejected.push(json!({ "minter": member, "code": e.code() }));
        }
    }

    let mut bank = InMemoryBank::new();
    let withdrawn = gate.withdraw(&owner_ctx, &mut bank)?;
    info!(
        minted = gate.total_minted(),
        rejected = rejected.len(),
        %withdrawn,
        "Simulation finished"
    );

    Ok(json!({
        "root": gate.config().merkle_root,
        "gate": gate.config().gate_address,
        "phase": gate.phase(now),
        "minted": gate.total_minted(),
        "rejected": rejected,
        "withdrawn": withdrawn,
        "events": gate.take_events(),
    }))
}
