//! Validator signature recovery.
//!
//! Validators sign redemption digests with a secp256k1 key following the
//! Ethereum personal-message convention: the digest is re-hashed together with
//! the `"\x19Ethereum Signed Message:\n32"` prefix before signing. Recovery
//! here must apply the same prefix or every signature recovers to the wrong
//! address.
//!
//! Signatures are accepted only in canonical form: `v` must be 27 or 28 and
//! `s` must lie in the lower half of the curve order. The malleable twin of a
//! canonical signature (high `s`, flipped `v`) is rejected as invalid rather
//! than normalized.

use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::hash::keccak256;

/// Prefix applied to a 32-byte digest before signing, per the Ethereum
/// personal-message convention.
pub const ETH_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// secp256k1 group order / 2, big-endian. Canonical signatures have s <= this.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Compute the prefixed digest that is actually signed.
pub fn personal_digest(message_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(ETH_MESSAGE_PREFIX);
    data[28..].copy_from_slice(message_hash);
    keccak256(&data)
}

/// Recover the 20-byte signer address from a digest and a (v, r, s) signature.
///
/// Non-canonical or malformed signatures are rejected as `InvalidSignature`;
/// this function never panics on attacker-controlled input. A structurally
/// valid signature from the wrong key recovers to an address that will not
/// match the expected validator, which the caller rejects.
pub fn recover_signer(
    api: &dyn Api,
    message_hash: &[u8; 32],
    v: u8,
    r: &[u8; 32],
    s: &[u8; 32],
) -> Result<[u8; 20], ContractError> {
    if v != 27 && v != 28 {
        return Err(ContractError::InvalidSignature);
    }
    if r.iter().all(|b| *b == 0) || s.iter().all(|b| *b == 0) {
        return Err(ContractError::InvalidSignature);
    }
    // big-endian byte comparison is numeric comparison
    if s[..] > SECP256K1_HALF_ORDER[..] {
        return Err(ContractError::InvalidSignature);
    }

    let digest = personal_digest(message_hash);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(r);
    signature[32..].copy_from_slice(s);

    let pubkey = api
        .secp256k1_recover_pubkey(&digest, &signature, v - 27)
        .map_err(|_| ContractError::InvalidSignature)?;

    // uncompressed SEC1 point: 0x04 || x || y
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return Err(ContractError::InvalidSignature);
    }

    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Parse a 20-byte hex address (with or without 0x prefix).
pub fn parse_eth_address(input: &str) -> Result<[u8; 20], ContractError> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(stripped).map_err(|_| ContractError::InvalidAddress {
        reason: format!("invalid hex in validator address: {}", input),
    })?;
    let address: [u8; 20] = bytes.try_into().map_err(|_| ContractError::InvalidAddress {
        reason: format!("validator address must be 20 bytes: {}", input),
    })?;
    Ok(address)
}

/// Format a 20-byte address as a 0x-prefixed hex string
pub fn eth_address_hex(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use k256::ecdsa::SigningKey;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn test_key() -> SigningKey {
        SigningKey::from_bytes(&[0x42u8; 32].into()).unwrap()
    }

    fn key_address(key: &SigningKey) -> [u8; 20] {
        let point = key.verifying_key().to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    fn sign(key: &SigningKey, message_hash: &[u8; 32]) -> (u8, [u8; 32], [u8; 32]) {
        let digest = personal_digest(message_hash);
        let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        (27 + recovery_id.to_byte(), r, s)
    }

    #[test]
    fn test_personal_digest_layout() {
        // prefix is exactly 28 bytes, so the input hash sits at offset 28
        assert_eq!(ETH_MESSAGE_PREFIX.len(), 28);

        let hash = [0xAB; 32];
        let a = personal_digest(&hash);
        let mut manual = Vec::new();
        manual.extend_from_slice(b"\x19Ethereum Signed Message:\n32");
        manual.extend_from_slice(&hash);
        assert_eq!(a, keccak256(&manual));
    }

    #[test]
    fn test_recover_round_trip() {
        let deps = mock_dependencies();
        let key = test_key();
        let message_hash = keccak256(b"redeem 10 to terra1recipient");

        let (v, r, s) = sign(&key, &message_hash);
        let recovered = recover_signer(&deps.api, &message_hash, v, &r, &s).unwrap();
        assert_eq!(recovered, key_address(&key));
    }

    #[test]
    fn test_recover_wrong_key_mismatches() {
        let deps = mock_dependencies();
        let key = test_key();
        let other = SigningKey::from_bytes(&[0x17u8; 32].into()).unwrap();
        let message_hash = keccak256(b"some message");

        let (v, r, s) = sign(&other, &message_hash);
        let recovered = recover_signer(&deps.api, &message_hash, v, &r, &s).unwrap();
        assert_ne!(recovered, key_address(&key));
        assert_eq!(recovered, key_address(&other));
    }

    #[test]
    fn test_recover_rejects_noncanonical_v() {
        let deps = mock_dependencies();
        let key = test_key();
        let message_hash = keccak256(b"some message");
        let (_, r, s) = sign(&key, &message_hash);

        for v in [0u8, 1, 26, 29, 255] {
            let err = recover_signer(&deps.api, &message_hash, v, &r, &s).unwrap_err();
            assert_eq!(err, ContractError::InvalidSignature);
        }
    }

    #[test]
    fn test_recover_rejects_high_s() {
        let deps = mock_dependencies();
        let key = test_key();
        let message_hash = keccak256(b"some message");
        let (v, r, _) = sign(&key, &message_hash);

        let high_s = [0xFF; 32];
        let err = recover_signer(&deps.api, &message_hash, v, &r, &high_s).unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature);
    }

    #[test]
    fn test_recover_rejects_zero_components() {
        let deps = mock_dependencies();
        let key = test_key();
        let message_hash = keccak256(b"some message");
        let (v, r, s) = sign(&key, &message_hash);

        let zero = [0u8; 32];
        assert_eq!(
            recover_signer(&deps.api, &message_hash, v, &zero, &s).unwrap_err(),
            ContractError::InvalidSignature
        );
        assert_eq!(
            recover_signer(&deps.api, &message_hash, v, &r, &zero).unwrap_err(),
            ContractError::InvalidSignature
        );
    }

    /// Signing the raw digest without the personal-message prefix must not
    /// recover the signer's address.
    #[test]
    fn test_prefix_is_mandatory() {
        let deps = mock_dependencies();
        let key = test_key();
        let message_hash = keccak256(b"some message");

        // sign the unprefixed digest directly
        let (signature, recovery_id) = key.sign_prehash_recoverable(&message_hash).unwrap();
        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        let v = 27 + recovery_id.to_byte();

        match recover_signer(&deps.api, &message_hash, v, &r, &s) {
            Ok(recovered) => assert_ne!(recovered, key_address(&key)),
            Err(err) => assert_eq!(err, ContractError::InvalidSignature),
        }
    }

    #[test]
    fn test_parse_eth_address() {
        let parsed = parse_eth_address("0x55d398326f99059ff775485246999027b3197955").unwrap();
        assert_eq!(parsed[0], 0x55);
        assert_eq!(parsed[19], 0x55);

        // without prefix
        let bare = parse_eth_address("55d398326f99059ff775485246999027b3197955").unwrap();
        assert_eq!(parsed, bare);

        assert!(parse_eth_address("0x1234").is_err());
        assert!(parse_eth_address("not hex at all").is_err());
    }

    #[test]
    fn test_eth_address_hex_round_trip() {
        let address = [0xABu8; 20];
        let hex_str = eth_address_hex(&address);
        assert_eq!(hex_str, format!("0x{}", "ab".repeat(20)));
        assert_eq!(parse_eth_address(&hex_str).unwrap(), address);
    }
}
