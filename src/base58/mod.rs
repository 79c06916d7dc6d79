//! Base58 encoding and decoding with version-byte checksum support.
//!
//! Provides raw Base58 encode/decode and Base58Check encode/decode
//! (version byte plus 4-byte double-SHA-256 checksum), shared by WIF
//! private-key serialization and legacy address encoding.

use crate::hash::sha256d;
use crate::KeyError;

/// Encode a byte slice to a Base58 string.
///
/// Uses Bitcoin's modified Base58 alphabet. Leading zero bytes
/// are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, KeyError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| KeyError::InvalidBase58(e.to_string()))
}

/// Base58Check-encode a payload under a version byte.
///
/// The checksum is the first 4 bytes of SHA-256d(version || payload).
/// The result is `encode(version || payload || checksum)`.
///
/// # Arguments
/// * `version` - The chain version byte to prepend.
/// * `payload` - The payload bytes (key bytes or address hash).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum[..4]);
    encode(&data)
}

/// Decode a Base58Check string into its version byte and payload.
///
/// Strips and validates the trailing 4-byte double-SHA-256 checksum,
/// then splits the remainder into the leading version byte and payload.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok((version, payload))` on success, or an error for invalid
/// encoding or checksum mismatch.
pub fn check_decode(s: &str) -> Result<(u8, Vec<u8>), KeyError> {
    let decoded = decode(s)?;
    if decoded.len() < 5 {
        return Err(KeyError::InvalidBase58(
            "data too short for version and checksum".to_string(),
        ));
    }
    let (data, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = sha256d(data);
    if checksum != &expected[..4] {
        return Err(KeyError::ChecksumMismatch);
    }
    Ok((data[0], data[1..].to_vec()))
}
