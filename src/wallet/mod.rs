//! Multi-chain derivation orchestrator.
//!
//! Composes the normalizer, the curve deriver, and the chain encoders
//! into one request/response operation: arbitrary key input in, one
//! identity per registered chain out. Also carries the small identity
//! helpers from the original wallet (fresh FLO identity, string-hash
//! identity, throwaway identity).

use rand::rngs::OsRng;
use rand::RngCore;

use crate::base58;
use crate::chain::{address, Chain, BTC_HRP, BTC_VERSIONS, FLO_VERSIONS};
use crate::ec::{PrivateKey, PublicKey};
use crate::hash::hash160;
use crate::material::KeyMaterial;
use crate::KeyError;

/// One chain's derived identity: an address and an exportable private key.
///
/// `private_key` is a WIF string for Base58Check chains and the raw
/// lowercase hex scalar for EVM-style chains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainIdentity {
    /// The chain-formatted address string.
    pub address: String,
    /// The chain-formatted private key export.
    pub private_key: String,
}

/// The identities for every registered chain, in fixed order.
///
/// Each entry is a tagged result: a per-chain encoding failure is
/// isolated to its own entry and never silently replaced with a
/// sentinel address string. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiChainResult {
    /// Bitcoin identity (bech32 segwit address, WIF key).
    pub btc: Result<ChainIdentity, KeyError>,
    /// FLO identity (legacy Base58Check address, WIF key).
    pub flo: Result<ChainIdentity, KeyError>,
    /// Avalanche C-Chain identity (EVM address, raw hex key).
    pub avax: Result<ChainIdentity, KeyError>,
}

impl MultiChainResult {
    /// Look up a chain's entry by identifier.
    pub fn get(&self, chain: Chain) -> &Result<ChainIdentity, KeyError> {
        match chain {
            Chain::Btc => &self.btc,
            Chain::Flo => &self.flo,
            Chain::Avax => &self.avax,
        }
    }
}

/// A fresh standalone identity: address, public key, and WIF.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdKeys {
    /// FLO legacy address.
    pub address: String,
    /// Compressed public key hex.
    pub public_key: String,
    /// FLO-versioned WIF private key.
    pub wif: String,
}

/// Derive identities for all registered chains from one key input.
///
/// Input handling follows the lenient wallet contract: `None`, blank,
/// or unparseable input yields a freshly generated key (the fallback is
/// logged, not surfaced). The elliptic-curve point is computed once and
/// shared by all three encoders. Strict input handling is available by
/// going through [`KeyMaterial::parse`] first.
///
/// # Arguments
/// * `input` - Optional key material: 64/128-char hex or a WIF string.
///
/// # Returns
/// `Ok(MultiChainResult)` with one tagged entry per chain, or a fatal
/// error if the key scalar is outside the valid curve range.
pub fn generate_multi_chain(input: Option<&str>) -> Result<MultiChainResult, KeyError> {
    let material = KeyMaterial::resolve(input);
    derive_all(&material)
}

/// Derive identities for all registered chains from normalized material.
///
/// # Arguments
/// * `material` - Canonical 32-byte key material with compression preference.
///
/// # Returns
/// `Ok(MultiChainResult)`, or `KeyError::InvalidPrivateKey` if the
/// scalar is zero or not below the curve order.
pub fn derive_all(material: &KeyMaterial) -> Result<MultiChainResult, KeyError> {
    let private_key = PrivateKey::from_bytes(&material.bytes)?;
    // One scalar multiplication, shared by every encoder.
    let public_key = private_key.public_key();

    let btc = derive_btc(&private_key, &public_key, material.compressed);
    let flo = derive_flo(&private_key, &public_key, material.compressed);
    let avax = derive_avax(&private_key, &public_key);

    Ok(MultiChainResult { btc, flo, avax })
}

fn derive_btc(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    compressed: bool,
) -> Result<ChainIdentity, KeyError> {
    let address = address::segwit_address(public_key, BTC_HRP)?;
    Ok(ChainIdentity {
        address,
        private_key: private_key.to_wif(BTC_VERSIONS.private, compressed),
    })
}

fn derive_flo(
    private_key: &PrivateKey,
    public_key: &PublicKey,
    compressed: bool,
) -> Result<ChainIdentity, KeyError> {
    Ok(ChainIdentity {
        address: address::legacy_address(public_key, FLO_VERSIONS.public),
        private_key: private_key.to_wif(FLO_VERSIONS.private, compressed),
    })
}

fn derive_avax(
    private_key: &PrivateKey,
    public_key: &PublicKey,
) -> Result<ChainIdentity, KeyError> {
    Ok(ChainIdentity {
        address: address::evm_address(public_key),
        private_key: private_key.to_hex(),
    })
}

/// Generate a fresh FLO identity.
///
/// # Returns
/// `IdKeys` with the legacy address, compressed public key hex, and
/// FLO-versioned compressed WIF for a new random key.
pub fn new_id() -> IdKeys {
    let private_key = PrivateKey::random();
    let public_key = private_key.public_key();
    IdKeys {
        address: address::legacy_address(&public_key, FLO_VERSIONS.public),
        public_key: public_key.to_hex(),
        wif: private_key.to_wif(FLO_VERSIONS.private, true),
    }
}

/// Derive a deterministic FLO-versioned identity from an arbitrary string.
///
/// Computes Hash160 of the UTF-8 bytes and Base58Check-encodes it under
/// the FLO public version byte. The result looks like an address but is
/// not backed by a key pair.
///
/// # Arguments
/// * `data` - The string to hash.
///
/// # Returns
/// A Base58Check identity string.
pub fn hash_id(data: &str) -> String {
    base58::check_encode(FLO_VERSIONS.public, &hash160(data.as_bytes()))
}

/// Generate a throwaway FLO-versioned identity from 20 random bytes.
///
/// # Returns
/// A Base58Check identity string not backed by a key pair.
pub fn tmp_id() -> String {
    let mut bytes = [0u8; 20];
    OsRng.fill_bytes(&mut bytes);
    base58::check_encode(FLO_VERSIONS.public, &bytes)
}
