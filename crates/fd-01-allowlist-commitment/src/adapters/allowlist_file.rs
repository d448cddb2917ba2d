//! # Allowlist Sources
//!
//! File-backed and in-memory implementations of [`AllowlistSource`].
//!
//! Two file formats are accepted:
//!
//! ```text
//! ["0xf39F…2266", "0x7099…79C8"]        # JSON array of strings
//!
//! # one address per line                # plain text
//! 0xf39F…2266
//! 0x7099…79C8
//! ```

use std::path::{Path, PathBuf};

use crate::ports::{AllowlistSource, SourceError};

/// Local development allowlist: the first twelve default accounts of a
/// local Hardhat/Anvil node.
pub const DEV_ALLOWLIST: [&str; 12] = [
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
    "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
    "0x90F79bf6EB2c4f870365E785982E1f101E93b906",
    "0xDdC12f7c85a9239519097856B695D1d34FBd61FC",
    "0xa17eC87407Cc5d09e78fCB773Ee22ed6842D686F",
    "0x784bb27d2a0eCB79793DE1f675b69415aE23B314",
    "0x5e080D8b14c1DA5936509c2c9EF0168A19304202",
    "0x9242097B87C052d4F6fC042B283c41499C38e531",
    "0xbC68dee71fd19C6eb4028F98F3C3aB62aAD6FeF3",
    "0x65Ca4F011426fC2AC02041FBAc0D12707070EA35",
    "0x6480Bc106F5a0B13D15F5c3AcB97fa9945B34508",
];

/// Allowlist stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileAllowlist {
    path: PathBuf,
}

impl FileAllowlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AllowlistSource for FileAllowlist {
    fn load(&self) -> Result<Vec<String>, SourceError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            origin: self.describe(),
            source,
        })?;
        parse_allowlist(&contents, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Allowlist held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticAllowlist {
    entries: Vec<String>,
}

impl StaticAllowlist {
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in development allowlist.
    pub fn dev() -> Self {
        Self::new(DEV_ALLOWLIST.iter().map(|s| s.to_string()))
    }
}

impl AllowlistSource for StaticAllowlist {
    fn load(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("static({} entries)", self.entries.len())
    }
}

/// Parse either a JSON array of strings or a line-per-address list.
fn parse_allowlist(contents: &str, origin: &str) -> Result<Vec<String>, SourceError> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).map_err(|source| SourceError::Json {
            origin: origin.to_string(),
            source,
        });
    }

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
