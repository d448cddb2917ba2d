//! Environment and file configuration for the admin CLI.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fd_01_allowlist_commitment::{AllowlistSource, FileAllowlist, StaticAllowlist};
use fd_02_mint_gate::SaleConfig;
use tracing::{info, warn};

/// Allowlist file used when `--allowlist` is not given.
pub const ALLOWLIST_ENV: &str = "FD_ALLOWLIST";

/// Log filter, takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "FD_LOG";

/// Where the allowlist comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowlistChoice {
    Dev,
    File(PathBuf),
}

/// `--dev` beats `--allowlist`, which beats `FD_ALLOWLIST`. With none of
/// them set the development allowlist is used.
pub fn resolve_allowlist(
    dev: bool,
    cli_path: Option<PathBuf>,
    env_path: Option<String>,
) -> AllowlistChoice {
    if dev {
        return AllowlistChoice::Dev;
    }
    if let Some(path) = cli_path {
        return AllowlistChoice::File(path);
    }
    match env_path.filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            info!(path = %path, "Using allowlist from {}", ALLOWLIST_ENV);
            AllowlistChoice::File(PathBuf::from(path))
        }
        None => {
            warn!("No allowlist given, falling back to the development allowlist");
            AllowlistChoice::Dev
        }
    }
}

pub fn open_source(choice: &AllowlistChoice) -> Box<dyn AllowlistSource> {
    match choice {
        AllowlistChoice::Dev => Box::new(StaticAllowlist::dev()),
        AllowlistChoice::File(path) => Box::new(FileAllowlist::new(path)),
    }
}

/// Read a sale config from JSON, or the defaults when no file is given.
pub fn load_sale_config(path: Option<&Path>) -> Result<SaleConfig> {
    let Some(path) = path else {
        return Ok(SaleConfig::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading sale config {}", path.display()))?;
    let config: SaleConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parsing sale config {}", path.display()))?;
    Ok(config)
}
