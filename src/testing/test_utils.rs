//! Test utilities for converter testing

use crate::config::Config;
use crate::error::{KeypairError, Result};
use crate::keypair::Keypair;
use data_encoding::HEXLOWER;
use std::fs;
use tempfile::TempDir;

// RFC 8032, section 7.1, test 1
pub const RFC8032_SEED_HEX: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
pub const RFC8032_PUBLIC_HEX: &str =
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
pub const RFC8032_PUBLIC_BASE58: &str = "FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z";

/// Create a temporary directory for testing
pub fn create_temp_dir() -> Result<TempDir> {
    tempfile::tempdir().map_err(|e| KeypairError::Io(e.to_string()))
}

/// Config rooted at a fresh temporary directory
pub fn create_test_config() -> Result<(Config, TempDir)> {
    let temp_dir = create_temp_dir()?;
    let config = Config::with_base_dir(temp_dir.path());
    Ok((config, temp_dir))
}

/// Write raw text to the config's input file
pub fn write_input(config: &Config, contents: &str) -> Result<()> {
    fs::write(config.input_path(), contents)?;
    Ok(())
}

pub fn read_output(config: &Config) -> Result<String> {
    Ok(fs::read_to_string(config.output_path())?)
}

pub fn output_exists(config: &Config) -> bool {
    config.output_path().exists()
}

/// Decode a lowercase hex test vector
pub fn hex_bytes(hex: &str) -> Vec<u8> {
    HEXLOWER.decode(hex.as_bytes()).unwrap()
}

/// RFC 8032 test 1 seed followed by its public key
pub fn rfc8032_keypair() -> Keypair {
    let mut bytes = hex_bytes(RFC8032_SEED_HEX);
    bytes.extend(hex_bytes(RFC8032_PUBLIC_HEX));
    Keypair::from_bytes(bytes)
}
