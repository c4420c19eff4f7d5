use crate::config::{Config, GLOBAL_CONFIG};
use crate::error::{KeypairError, Result};
use crate::keypair::Keypair;
use crate::utils::base58_decode;
use std::fs;
use std::path::Path;

/// Wrap an encoded keypair the way the result file stores it
pub fn format_encoded_output(encoded: &str) -> String {
    format!("[{encoded}]")
}

pub fn encode_keypair(keypair: &Keypair) -> String {
    keypair.to_base58()
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| KeypairError::OutputNotWritable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Convert the config's keypair file and write the bracketed base58 result.
///
/// The input is fully read and parsed before the output file is touched, so
/// a bad input leaves any existing result file as it was. Returns the
/// encoded string without brackets.
pub fn convert_file(config: &Config) -> Result<String> {
    let input = config.input_path();
    let output = config.output_path();

    let keypair = Keypair::from_file(&input)?;
    let encoded = encode_keypair(&keypair);
    write_output(&output, &format_encoded_output(&encoded))?;

    log::info!(
        "Converted {} bytes from {} to {}",
        keypair.len(),
        input.display(),
        output.display()
    );
    Ok(encoded)
}

/// Convert `./dev-wallet.json` into `./convert-result-dev-wallet.json`
pub fn convert_default() -> Result<String> {
    convert_file(&GLOBAL_CONFIG)
}

/// `[1,2,3]` style wallet line to base58
pub fn wallet_to_base58(line: &str) -> Result<String> {
    let keypair = Keypair::from_json_str(line.trim())?;
    Ok(keypair.to_base58())
}

/// base58 line to compact `[1,2,3]` wallet form
pub fn base58_to_wallet(line: &str) -> Result<String> {
    let keypair = Keypair::from_bytes(base58_decode(line.trim())?);
    keypair.to_json_array()
}
