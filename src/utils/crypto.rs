use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{Ed25519KeyPair, KeyPair};
use zeroize::Zeroize;

use crate::error::{KeypairError, Result};

pub const ED25519_SEED_LEN: usize = 32;
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Fill a fresh Ed25519 seed from the system CSPRNG
pub fn random_seed() -> Result<Vec<u8>> {
    let rng = SystemRandom::new();
    let mut seed = vec![0u8; ED25519_SEED_LEN];
    rng.fill(&mut seed)
        .map_err(|e| KeypairError::Crypto(format!("Failed to generate random seed: {e}")))?;
    Ok(seed)
}

pub fn ed25519_public_key_from_seed(seed: &[u8]) -> Result<Vec<u8>> {
    if seed.len() != ED25519_SEED_LEN {
        return Err(KeypairError::InvalidKeypair(format!(
            "Ed25519 seed must be {ED25519_SEED_LEN} bytes, got {}",
            seed.len()
        )));
    }
    let key_pair = Ed25519KeyPair::from_seed_unchecked(seed)
        .map_err(|e| KeypairError::Crypto(format!("Failed to derive Ed25519 key pair: {e}")))?;
    Ok(key_pair.public_key().as_ref().to_vec())
}

/// Securely clear sensitive data from memory
pub fn secure_clear(data: &mut [u8]) {
    data.zeroize();
}
