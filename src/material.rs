//! Key material normalization.
//!
//! Turns arbitrary private-key input (raw hex, chain-versioned WIF, or
//! nothing) into a canonical 32-byte secret plus a compression preference.
//! Two policies are provided: strict parsing that surfaces malformed input
//! as a typed error, and a lenient resolver that falls back to generating
//! a fresh key, matching the original wallet contract.

use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base58;
use crate::ec::PrivateKey;
use crate::KeyError;

/// Hex length of a raw 32-byte private key.
const RAW_KEY_HEX_LEN: usize = 64;

/// Hex length of a public-key-adjacent string; only the first half is used.
const EXTENDED_HEX_LEN: usize = 128;

/// WIF compression marker appended after the 32 key bytes.
const COMPRESS_MAGIC: u8 = 0x01;

/// Canonical private-key material: 32 secret bytes plus a compression
/// preference for WIF re-export.
///
/// A request-scoped value type; consumed by one derivation and zeroized
/// on drop. The byte length is exactly 32 by construction.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    /// The 32-byte private key scalar.
    pub bytes: [u8; 32],
    /// Whether WIF export should carry the compression marker.
    #[zeroize(skip)]
    pub compressed: bool,
}

impl KeyMaterial {
    /// Generate fresh random key material.
    ///
    /// Uses the OS random number generator via the curve implementation,
    /// so the scalar is always within the valid range. Compression
    /// defaults to true.
    ///
    /// # Returns
    /// New random `KeyMaterial`.
    pub fn generate() -> Self {
        let key = PrivateKey::random();
        KeyMaterial {
            bytes: key.to_bytes(),
            compressed: true,
        }
    }

    /// Strictly parse key input as raw hex or a WIF string.
    ///
    /// The input is trimmed first. A string of exactly 64 or 128 hex
    /// characters is taken as raw key material (only the first 64 hex
    /// characters are used; the 128 form is deliberate tolerance for
    /// public-key-adjacent strings, not a hashing step). Anything else is
    /// decoded as Base58Check WIF: a 33-byte payload ending in 0x01 means
    /// compressed, a 32-byte payload means uncompressed.
    ///
    /// # Arguments
    /// * `input` - The raw user-supplied key string.
    ///
    /// # Returns
    /// `Ok(KeyMaterial)` on success, or `KeyError::MalformedInput` if the
    /// input is neither valid hex-length nor Base58Check-decodable (a
    /// checksum mismatch counts as malformed).
    pub fn parse(input: &str) -> Result<Self, KeyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(KeyError::MalformedInput("empty input".to_string()));
        }

        let hex_only = trimmed.bytes().all(|b| b.is_ascii_hexdigit());
        if hex_only && (trimmed.len() == RAW_KEY_HEX_LEN || trimmed.len() == EXTENDED_HEX_LEN) {
            let decoded = hex::decode(&trimmed[..RAW_KEY_HEX_LEN])?;
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(&decoded);
            return Ok(KeyMaterial {
                bytes,
                compressed: true,
            });
        }

        Self::parse_wif(trimmed)
    }

    /// Decode a WIF string into key material.
    ///
    /// Strips the version byte and 4-byte checksum via Base58Check, then
    /// interprets the payload length and trailing compression marker.
    fn parse_wif(wif: &str) -> Result<Self, KeyError> {
        let (version, payload) = match base58::check_decode(wif) {
            Ok(decoded) => decoded,
            Err(KeyError::ChecksumMismatch) => {
                return Err(KeyError::MalformedInput(
                    "WIF checksum mismatch".to_string(),
                ));
            }
            Err(e) => {
                return Err(KeyError::MalformedInput(e.to_string()));
            }
        };

        let (key_bytes, compressed) = match payload.len() {
            33 if payload[32] == COMPRESS_MAGIC => (&payload[..32], true),
            32 => (&payload[..], false),
            _ => {
                return Err(KeyError::MalformedInput(format!(
                    "WIF payload has unexpected length {}",
                    payload.len()
                )));
            }
        };
        debug!(version, compressed, "decoded WIF key material");

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(key_bytes);
        Ok(KeyMaterial { bytes, compressed })
    }

    /// Resolve optional key input into material, falling back to generation.
    ///
    /// `None` or blank input yields fresh random material. Malformed input
    /// is a recoverable condition: it is logged and replaced with fresh
    /// random material rather than surfaced. Callers that want a typed
    /// error for bad input should use [`KeyMaterial::parse`] instead.
    ///
    /// # Arguments
    /// * `input` - Optional raw key string.
    ///
    /// # Returns
    /// `KeyMaterial`, always with a 32-byte key.
    pub fn resolve(input: Option<&str>) -> Self {
        match input {
            Some(s) if !s.trim().is_empty() => match Self::parse(s) {
                Ok(material) => material,
                Err(e) => {
                    warn!(error = %e, "invalid key input, generating new key");
                    Self::generate()
                }
            },
            _ => Self::generate(),
        }
    }
}

impl std::fmt::Debug for KeyMaterial {
    /// Debug form redacts the key bytes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("bytes", &"[redacted]")
            .field("compressed", &self.compressed)
            .finish()
    }
}
