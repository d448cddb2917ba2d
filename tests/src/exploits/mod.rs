//! # Exploit Simulations
//!
//! Attacks a hostile minter would try against a live sale.

pub mod proof_abuse;
pub mod race;
