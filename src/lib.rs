//! Multi-chain key derivation.
//!
//! This crate turns arbitrary private-key input (raw hex, WIF, or
//! nothing) into a canonical secp256k1 secret and derives, from a single
//! keypair, one identity per supported chain:
//! - BTC: bech32 segwit address + WIF private key
//! - FLO: legacy Base58Check address + WIF private key
//! - AVAX (C-Chain): Keccak-256 EVM address + raw hex private key
//!
//! The derivation is pure, synchronous computation with no shared
//! mutable state; chain parameters are passed explicitly, so calls are
//! safe to run concurrently.
//!
//! ```no_run
//! let result = chainkeys::generate_multi_chain(None).unwrap();
//! let avax = result.avax.unwrap();
//! assert_eq!(avax.address.len(), 42);
//! ```

pub mod base58;
pub mod chain;
pub mod ec;
pub mod hash;
pub mod material;
pub mod wallet;

mod error;
pub use error::KeyError;

pub use chain::{Chain, VersionBytes};
pub use ec::{PrivateKey, PublicKey};
pub use material::KeyMaterial;
pub use wallet::{generate_multi_chain, ChainIdentity, IdKeys, MultiChainResult};
