//! Error handling for keypair conversion
//!
//! Every failure the converter and its helpers can hit maps onto one variant
//! of [`KeypairError`]. Nothing here is recovered from; `main` logs the error
//! and exits non-zero.

use serde_json::error::Category;
use std::fmt;

/// Result type alias for keypair operations
pub type Result<T> = std::result::Result<T, KeypairError>;

/// Error types for keypair operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypairError {
    /// The keypair file does not exist
    InputNotFound(String),
    /// The input is not syntactically valid JSON
    InvalidJson(String),
    /// The input is JSON but not an array of byte values
    NotByteArray(String),
    /// The output file could not be created or written
    OutputNotWritable { path: String, reason: String },
    /// Any other file or stream I/O error
    Io(String),
    /// A string that is not valid base58
    InvalidBase58(String),
    /// Key material of the wrong shape for the requested operation
    InvalidKeypair(String),
    /// Key derivation or randomness errors
    Crypto(String),
}

impl fmt::Display for KeypairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeypairError::InputNotFound(path) => write!(f, "Keypair file not found: {path}"),
            KeypairError::InvalidJson(msg) => write!(f, "Invalid JSON: {msg}"),
            KeypairError::NotByteArray(msg) => write!(f, "Not a byte array: {msg}"),
            KeypairError::OutputNotWritable { path, reason } => {
                write!(f, "Cannot write output file {path}: {reason}")
            }
            KeypairError::Io(msg) => write!(f, "I/O error: {msg}"),
            KeypairError::InvalidBase58(msg) => write!(f, "Invalid base58: {msg}"),
            KeypairError::InvalidKeypair(msg) => write!(f, "Invalid keypair: {msg}"),
            KeypairError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
        }
    }
}

impl std::error::Error for KeypairError {}

impl From<std::io::Error> for KeypairError {
    fn from(err: std::io::Error) -> Self {
        KeypairError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KeypairError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => KeypairError::NotByteArray(err.to_string()),
            Category::Syntax | Category::Eof => KeypairError::InvalidJson(err.to_string()),
            Category::Io => KeypairError::Io(err.to_string()),
        }
    }
}

impl From<bs58::decode::Error> for KeypairError {
    fn from(err: bs58::decode::Error) -> Self {
        KeypairError::InvalidBase58(err.to_string())
    }
}
