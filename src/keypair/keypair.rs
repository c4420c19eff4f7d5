use crate::error::{KeypairError, Result};
use crate::utils::{
    base58_encode, ed25519_public_key_from_seed, random_seed, secure_clear,
    ED25519_PUBLIC_KEY_LEN, ED25519_SEED_LEN,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a Solana-style keypair: Ed25519 seed followed by its public key
pub const KEYPAIR_LEN: usize = ED25519_SEED_LEN + ED25519_PUBLIC_KEY_LEN;

/// Raw keypair bytes as stored in a wallet file.
///
/// The conversion path accepts any length. Only the public-key helpers
/// require the 64-byte Solana layout.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Keypair {
    bytes: Vec<u8>,
}

impl Keypair {
    pub fn from_bytes(bytes: Vec<u8>) -> Keypair {
        Keypair { bytes }
    }

    /// Parse a JSON array of integers in `0..=255`
    pub fn from_json_str(json: &str) -> Result<Keypair> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same as [`Keypair::from_json_str`], for raw file contents
    pub fn from_json_slice(json: &[u8]) -> Result<Keypair> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Read and parse a wallet file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Keypair> {
        let path = path.as_ref();
        let mut contents = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => KeypairError::InputNotFound(path.display().to_string()),
            _ => KeypairError::Io(format!("Failed to read {}: {e}", path.display())),
        })?;
        let parsed = Keypair::from_json_slice(&contents);
        secure_clear(&mut contents);
        let keypair = parsed?;
        log::debug!("Read {} keypair bytes from {}", keypair.len(), path.display());
        Ok(keypair)
    }

    /// Generate a new Solana-style keypair
    pub fn generate() -> Result<Keypair> {
        let mut seed = random_seed()?;
        let public = ed25519_public_key_from_seed(&seed)?;

        let mut bytes = Vec::with_capacity(KEYPAIR_LEN);
        bytes.extend_from_slice(&seed);
        bytes.extend_from_slice(&public);
        secure_clear(&mut seed);

        Ok(Keypair { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base58(&self) -> String {
        base58_encode(&self.bytes)
    }

    /// Compact wallet-file form, e.g. `[1,2,3]`
    pub fn to_json_array(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.bytes)?)
    }

    fn check_solana_layout(&self) -> Result<()> {
        if self.bytes.len() != KEYPAIR_LEN {
            return Err(KeypairError::InvalidKeypair(format!(
                "expected {KEYPAIR_LEN} bytes, got {}",
                self.bytes.len()
            )));
        }
        Ok(())
    }

    pub fn seed(&self) -> Result<&[u8]> {
        self.check_solana_layout()?;
        Ok(&self.bytes[..ED25519_SEED_LEN])
    }

    /// The public half as written in the file, unverified
    pub fn stored_public_key(&self) -> Result<&[u8]> {
        self.check_solana_layout()?;
        Ok(&self.bytes[ED25519_SEED_LEN..])
    }

    pub fn derive_public_key(&self) -> Result<Vec<u8>> {
        ed25519_public_key_from_seed(self.seed()?)
    }

    /// Derive the public key and check it against the stored half
    pub fn verified_public_key(&self) -> Result<Vec<u8>> {
        let derived = self.derive_public_key()?;
        let stored = self.stored_public_key()?;
        if derived.as_slice() != stored {
            log::warn!(
                "Stored public key {} does not match derived key {}",
                base58_encode(stored),
                base58_encode(&derived)
            );
            return Err(KeypairError::InvalidKeypair(
                "public key does not match secret seed".to_string(),
            ));
        }
        Ok(derived)
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("length", &self.bytes.len())
            .finish()
    }
}
