//! # Adapters Layer
//!
//! Secondary adapters for fd-01 Allowlist Commitment.

pub mod allowlist_file;
pub mod api_handler;

pub use allowlist_file::{FileAllowlist, StaticAllowlist, DEV_ALLOWLIST};
pub use api_handler::{handle_api_query, ApiQueryError, ApiQueryHandler};
