//! # keypair-convert
//!
//! Converts a wallet keypair stored as a JSON byte array into base58.
//!
//! ## What It Does
//! - **Conversion**: `./dev-wallet.json` becomes `./convert-result-dev-wallet.json`
//!   holding `[<base58>]`, with no other text
//! - **Wallet helpers**: byte array to base58 and back, one line at a time
//! - **Public keys**: derive and check the Ed25519 public key of a 64-byte
//!   Solana-style keypair, or generate a fresh one
//!
//! ## How the Code Is Organized
//! - `convert/`: the file conversion and the line helpers
//! - `keypair/`: parsing and inspecting keypair bytes
//! - `config/`: working directory and the fixed file names
//! - `utils/`: base58 and Ed25519 helpers
//! - `cli/`: command-line parsing
//! - `error/`: the error enum every operation returns

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod keypair;
pub mod utils;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use cli::{read_first_line, Command, Opt};
pub use config::{Config, GLOBAL_CONFIG, INPUT_FILE, OUTPUT_FILE};
pub use convert::{
    base58_to_wallet, convert_default, convert_file, encode_keypair, format_encoded_output,
    wallet_to_base58,
};
pub use error::{KeypairError, Result};
pub use keypair::{Keypair, KEYPAIR_LEN};
pub use utils::{base58_decode, base58_encode};
