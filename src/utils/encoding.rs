use crate::error::Result;

/// Base58 with the Bitcoin alphabet; no checksum, no version byte
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(data).into_vec()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeypairError;

    #[test]
    fn test_base58_encode_known_values() {
        assert_eq!(base58_encode(&[88, 192, 0, 17]), "3GaQGQ");
        assert_eq!(base58_encode(b"Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(base58_encode(&[]), "");
    }

    #[test]
    fn test_leading_zero_bytes_become_ones() {
        assert_eq!(base58_encode(&[0, 0, 1]), "112");
        assert_eq!(base58_decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_base58_decode_rejects_ambiguous_characters() {
        for bad in ["0", "O", "I", "l", "abc!"] {
            assert!(matches!(
                base58_decode(bad),
                Err(KeypairError::InvalidBase58(_))
            ));
        }
    }
}
