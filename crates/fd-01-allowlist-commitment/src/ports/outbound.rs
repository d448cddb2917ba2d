//! # Outbound Ports (Driven Ports)
//!
//! SPIs required by the Allowlist Commitment subsystem.

use thiserror::Error;

/// Where the raw allowlist comes from.
///
/// How addresses get chosen is external policy; this port only delivers the
/// already-decided list as strings. Parsing into addresses happens in the
/// domain so every source is held to the same canonicalization.
pub trait AllowlistSource {
    /// Load the raw address strings, in source order.
    fn load(&self) -> Result<Vec<String>, SourceError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Allowlist source errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be read.
    #[error("failed to read allowlist {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON allowlist was not an array of strings.
    #[error("malformed JSON allowlist {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
