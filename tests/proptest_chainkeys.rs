use proptest::prelude::*;

use chainkeys::base58;
use chainkeys::chain::{address, BTC_HRP, BTC_VERSIONS, FLO_VERSIONS};
use chainkeys::material::KeyMaterial;
use chainkeys::wallet::derive_all;
use chainkeys::PrivateKey;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wif_roundtrip_all_registered_versions(seed in prop::array::uniform32(any::<u8>())) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            for versions in [BTC_VERSIONS, FLO_VERSIONS] {
                for compressed in [true, false] {
                    let wif = pk.to_wif(versions.private, compressed);
                    let (version, payload) = base58::check_decode(&wif).unwrap();
                    prop_assert_eq!(version, versions.private);
                    prop_assert_eq!(&payload[..32], &pk.to_bytes()[..]);
                    prop_assert_eq!(payload.len(), if compressed { 33 } else { 32 });
                }
            }
        }
    }

    #[test]
    fn base58check_reencode_reproduces(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let addr = address::legacy_address(&pk.public_key(), FLO_VERSIONS.public);
            let (version, payload) = base58::check_decode(&addr).unwrap();
            prop_assert_eq!(base58::check_encode(version, &payload), addr);
        }
    }

    #[test]
    fn derivation_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        if PrivateKey::from_bytes(&seed).is_ok() {
            let hex_input = hex::encode(seed);
            let material = KeyMaterial::parse(&hex_input).unwrap();
            let a = derive_all(&material).unwrap();
            let b = derive_all(&material).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn evm_address_is_always_42_lowercase_hex(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let addr = address::evm_address(&pk.public_key());
            prop_assert_eq!(addr.len(), 42);
            prop_assert!(addr.starts_with("0x"));
            prop_assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn extended_hex_input_matches_first_half(
        seed in prop::array::uniform32(any::<u8>()),
        tail in prop::array::uniform32(any::<u8>())
    ) {
        if PrivateKey::from_bytes(&seed).is_ok() {
            let short = hex::encode(seed);
            let extended = format!("{}{}", short, hex::encode(tail));
            let a = KeyMaterial::parse(&short).unwrap();
            let b = KeyMaterial::parse(&extended).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn segwit_and_legacy_share_the_witness_program(seed in prop::array::uniform32(any::<u8>())) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let pub_key = pk.public_key();
            let segwit = address::segwit_address(&pub_key, BTC_HRP).unwrap();
            let legacy = address::legacy_address(&pub_key, BTC_VERSIONS.public);
            // Both encode hash160 of the same compressed pubkey.
            let (_, payload) = base58::check_decode(&legacy).unwrap();
            prop_assert_eq!(payload, pub_key.hash160().to_vec());
            prop_assert!(segwit.starts_with("bc1q"));
        }
    }

    #[test]
    fn malformed_input_never_panics(input in "\\PC{0,80}") {
        // Any unicode garbage must either parse or fail with a typed error.
        let _ = KeyMaterial::parse(&input);
        let _ = chainkeys::generate_multi_chain(Some(&input));
    }
}
