//! Chain address encoders.
//!
//! Three independent, stateless strategies over one public key:
//! legacy Base58Check (FLO-class), segwit bech32 (BTC-class), and
//! EVM Keccak-256 (AVAX-class). The first two consume the compressed
//! serialization; the EVM encoder is the only one hashing the
//! uncompressed form and the only one without a version byte.

use bech32::{u5, ToBase32, Variant};

use crate::base58;
use crate::ec::PublicKey;
use crate::hash::keccak256;
use crate::KeyError;

/// Segwit witness version for P2WPKH programs.
const WITNESS_V0: u8 = 0;

/// Encode a legacy Base58Check address from a public key.
///
/// address = check_encode(version, RIPEMD160(SHA256(compressed_pubkey))).
///
/// # Arguments
/// * `pub_key` - The public key to encode.
/// * `version` - The chain's public-key-hash version byte.
///
/// # Returns
/// A Base58Check-encoded address string.
pub fn legacy_address(pub_key: &PublicKey, version: u8) -> String {
    base58::check_encode(version, &pub_key.hash160())
}

/// Encode a segwit v0 bech32 address from a public key.
///
/// The witness program is the Hash160 of the compressed public key;
/// the address encodes witness version 0 followed by the program under
/// the chain's human-readable prefix (bech32, not bech32m).
///
/// # Arguments
/// * `pub_key` - The public key to encode.
/// * `hrp` - The chain's human-readable prefix ("bc" for BTC).
///
/// # Returns
/// A bech32 address string, or an error if the prefix is unusable.
pub fn segwit_address(pub_key: &PublicKey, hrp: &str) -> Result<String, KeyError> {
    let program = pub_key.hash160();
    let version = u5::try_from_u8(WITNESS_V0)
        .map_err(|e| KeyError::ChainEncoding(e.to_string()))?;
    let mut data = vec![version];
    data.extend(program.to_base32());
    bech32::encode(hrp, data, Variant::Bech32)
        .map_err(|e| KeyError::ChainEncoding(e.to_string()))
}

/// Encode an EVM address from a public key.
///
/// address = "0x" + lowercase hex of the last 20 bytes of
/// Keccak256(uncompressed_pubkey without the 0x04 marker). Always 42
/// characters; no EIP-55 checksum casing is applied.
///
/// # Arguments
/// * `pub_key` - The public key to encode.
///
/// # Returns
/// A 0x-prefixed lowercase hex address string.
pub fn evm_address(pub_key: &PublicKey) -> String {
    let uncompressed = pub_key.to_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}
