//! Keypair model
//!
//! Wallet files hold a keypair as a JSON array of byte values. This module
//! parses them and, for 64-byte Solana-style keypairs, derives and checks
//! the Ed25519 public key.

#[allow(clippy::module_inception)]
pub mod keypair;

pub use keypair::{Keypair, KEYPAIR_LEN};
