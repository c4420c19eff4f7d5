//! Keypair conversion
//!
//! The fixed-path wallet file conversion plus the single-line helpers that
//! turn a wallet byte array into base58 and back.

pub mod converter;

pub use converter::{
    base58_to_wallet, convert_default, convert_file, encode_keypair, format_encoded_output,
    wallet_to_base58,
};
