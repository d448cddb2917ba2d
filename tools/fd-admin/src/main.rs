//! fd-admin: FjordDrop admin CLI
//!
//! Publishes the allowlist root, looks up proofs for minters, and dry-runs a
//! sale against the mint gate.

mod commands;
mod config;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fd_01_allowlist_commitment::{ApiQueryHandler, CommitmentConfig, CommitmentService};
use serde_json::Value;
use shared_types::Address;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{load_sale_config, open_source, resolve_allowlist, ALLOWLIST_ENV, LOG_ENV};

/// FjordDrop allowlist and mint gate admin tool
#[derive(Parser, Debug)]
#[command(name = "fd-admin")]
#[command(about = "Publish allowlist roots, serve proofs, dry-run a sale")]
struct Args {
    /// Allowlist file (JSON array or one address per line). Falls back to $FD_ALLOWLIST.
    #[arg(short, long, global = true)]
    allowlist: Option<PathBuf>,

    /// Use the built-in development allowlist
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the Merkle root of the allowlist
    Root,

    /// Print the proof for one address
    Proof {
        address: String,
    },

    /// Check a proof against a root (no allowlist needed)
    Verify {
        #[arg(long)]
        root: String,
        #[arg(long)]
        address: String,
        /// Comma-separated sibling hashes
        #[arg(long, value_delimiter = ',')]
        proof: Vec<String>,
    },

    /// Run one lookup query, e.g. `query getMerkleProof '{"address":"0x…"}'`
    Query {
        method: String,
        params: Option<String>,
    },

    /// Answer newline-delimited JSON queries on stdin
    Serve,

    /// Deploy an in-memory gate on the root and mint every member's allowance
    Simulate {
        /// Sale config JSON (defaults apply to missing fields)
        #[arg(long)]
        sale: Option<PathBuf>,

        /// Gate owner; defaults to the payout address, then the first member
        #[arg(long)]
        owner: Option<String>,

        /// Allowlist window length in seconds
        #[arg(long, default_value = "86400")]
        window: u64,
    },
}

fn init_logging() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_service(args: &Args) -> Result<CommitmentService> {
    let choice = resolve_allowlist(
        args.dev,
        args.allowlist.clone(),
        std::env::var(ALLOWLIST_ENV).ok(),
    );
    let source = open_source(&choice);
    CommitmentService::from_source(source.as_ref(), &CommitmentConfig::default())
        .with_context(|| format!("committing allowlist {}", source.describe()))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match &args.command {
        Command::Root => print(&commands::root(&load_service(&args)?)),
        Command::Proof { address } => {
            let mut service = load_service(&args)?;
            print(&commands::proof(&mut service, address)?)
        }
        Command::Verify {
            root,
            address,
            proof,
        } => print(&commands::verify(root, address, proof)?),
        Command::Query { method, params } => {
            let params: Value = match params {
                Some(raw) => serde_json::from_str(raw).context("params must be JSON")?,
                None => Value::Null,
            };
            let mut handler = ApiQueryHandler::new(load_service(&args)?);
            print(&commands::query(&mut handler, method, &params))
        }
        Command::Serve => {
            let mut handler = ApiQueryHandler::new(load_service(&args)?);
            info!("Serving queries on stdin");
            let stdin = std::io::stdin();
            let served = commands::serve(&mut handler, stdin.lock(), std::io::stdout().lock())?;
            info!(served, "Input closed");
            Ok(())
        }
        Command::Simulate {
            sale,
            owner,
            window,
        } => {
            let mut service = load_service(&args)?;
            let sale = load_sale_config(sale.as_deref())?;
            let owner = match owner {
                Some(hex) => Address::from_hex(hex).context("bad --owner")?,
                None if !sale.payout_address.is_zero() => sale.payout_address,
                None => *service
                    .leaf_set()
                    .addresses()
                    .next()
                    .context("allowlist is empty")?,
            };
            print(&commands::simulate(
                &mut service,
                sale,
                owner,
                unix_now(),
                *window,
            )?)
        }
    }
}
