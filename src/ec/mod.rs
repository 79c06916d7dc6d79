/// Elliptic curve cryptography on secp256k1.
///
/// Provides the private-key and public-key types shared by every chain
/// encoder: one scalar, one curve point, serialized per chain.

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
