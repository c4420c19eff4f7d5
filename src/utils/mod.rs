//! Utility functions and helpers
//!
//! This module contains the base58 codec wrappers and the Ed25519 helpers
//! used by the keypair model.

pub mod crypto;
pub mod encoding;

pub use crypto::{
    ed25519_public_key_from_seed, random_seed, secure_clear, ED25519_PUBLIC_KEY_LEN,
    ED25519_SEED_LEN,
};
pub use encoding::{base58_decode, base58_encode};
