//! secp256k1 private key with chain-agnostic export functionality.
//!
//! Wraps a k256 signing key and adds WIF encoding under arbitrary chain
//! version bytes, hex serialization, and public-key derivation.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::KeyError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key.
///
/// Wraps a k256 `SigningKey` and provides byte/hex serialization,
/// WIF export with an explicit version byte and compression flag,
/// and derivation of the corresponding public key.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    ///
    /// The generated scalar is always within the valid range `[1, n-1]`.
    ///
    /// # Returns
    /// A new randomly generated `PrivateKey`.
    pub fn random() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        PrivateKey {
            inner: signing_key,
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or not below the curve order.
    /// Out-of-range scalars are rejected outright, never reduced.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let array: [u8; PRIVATE_KEY_BYTES_LEN] =
            bytes.try_into().map_err(|_| KeyError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            })?;
        let signing_key = SigningKey::from_bytes(&array.into())
            .map_err(|e| KeyError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey {
            inner: signing_key,
        })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        if hex_str.is_empty() {
            return Err(KeyError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Encode the private key as a WIF string under a chain version byte.
    ///
    /// The payload is the 32 key bytes, with a trailing `0x01` appended iff
    /// `compressed` is true, Base58Check-encoded under `version`.
    ///
    /// # Arguments
    /// * `version` - The chain's private-key version byte (0x80 for BTC, 0xa3 for FLO).
    /// * `compressed` - Whether the corresponding public key is compressed.
    ///
    /// # Returns
    /// A Base58Check-encoded WIF string.
    pub fn to_wif(&self, version: u8, compressed: bool) -> String {
        let key_bytes = self.to_bytes();
        let mut payload = Vec::with_capacity(PRIVATE_KEY_BYTES_LEN + 1);
        payload.extend_from_slice(&key_bytes);
        if compressed {
            payload.push(COMPRESS_MAGIC);
        }
        base58::check_encode(version, &payload)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    ///
    /// # Returns
    /// A 32-byte array containing the private key scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    ///
    /// This is the export form for EVM-style chains, which have no WIF.
    ///
    /// # Returns
    /// A 64-character hex string representing the 32-byte scalar.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    ///
    /// Performs the scalar-by-generator multiplication; derive once per
    /// request and reuse the result across chain encoders.
    ///
    /// # Returns
    /// The `PublicKey` corresponding to this private key.
    pub fn public_key(&self) -> PublicKey {
        let verifying_key = self.inner.verifying_key();
        PublicKey::from_k256_verifying_key(verifying_key)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // SigningKey stores the scalar internally; zeroize its bytes copy.
        let mut bytes = self.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generator-point scalar, the standard secp256k1 test vector.
    const KEY_ONE_HEX: &str =
        "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_from_hex_to_bytes_roundtrip() {
        let pk = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        assert_eq!(pk.to_hex(), KEY_ONE_HEX);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(pk.to_bytes(), expected);
    }

    #[test]
    fn test_random_keys_differ() {
        let a = PrivateKey::random();
        let b = PrivateKey::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert_eq!(
            PrivateKey::from_bytes(&[1u8; 31]),
            Err(KeyError::InvalidKeyLength {
                expected: 32,
                got: 31
            })
        );
        assert!(PrivateKey::from_bytes(&[1u8; 33]).is_err());
        assert!(PrivateKey::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_zero_scalar() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_scalar_above_order() {
        // 0xff..ff is above the secp256k1 group order.
        assert!(PrivateKey::from_bytes(&[0xffu8; 32]).is_err());
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("zz").is_err());
        let wif = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
        assert!(PrivateKey::from_hex(wif).is_err());
    }

    #[test]
    fn test_to_wif_btc_versions() {
        let pk = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        assert_eq!(
            pk.to_wif(0x80, true),
            "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"
        );
        assert_eq!(
            pk.to_wif(0x80, false),
            "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
        );
    }

    #[test]
    fn test_to_wif_flo_version() {
        let pk = PrivateKey::from_hex(KEY_ONE_HEX).unwrap();
        assert_eq!(
            pk.to_wif(0xa3, true),
            "R7WnCJjdY4LQqMAD9MLZmNRPZpkL5DCVY1YFD3US2zr1uTVbv7Sr"
        );
    }

    #[test]
    fn test_wif_roundtrip_through_base58() {
        let pk = PrivateKey::random();
        let wif = pk.to_wif(0x80, true);
        let (version, payload) = crate::base58::check_decode(&wif).unwrap();
        assert_eq!(version, 0x80);
        assert_eq!(payload.len(), 33);
        assert_eq!(payload[32], 0x01);
        assert_eq!(payload[..32], pk.to_bytes());
    }
}
