//! Redemption digest computation.
//!
//! The digest is the 32-byte commitment a validator signs to authorize a
//! redemption, and doubles as the replay-protection key: once a digest has
//! been consumed it can never be consumed again.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    keccak256(chain id)
//! - Bytes 32-63:   keccak256(bridge contract address)
//! - Bytes 64-95:   keccak256(recipient address)
//! - Bytes 96-127:  amount (uint256, big-endian, left-padded)
//! - Bytes 128-159: nonce (uint256, big-endian, left-padded)
//!
//! Binding the chain id and contract address into the digest prevents a
//! signature issued for one deployment from being replayed against another;
//! binding the nonce prevents the same signature from authorizing more than
//! one payout to the same recipient.

use cosmwasm_std::Addr;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the canonical redemption digest.
///
/// Variable-length fields (chain id, addresses) occupy their 32-byte slot as
/// their keccak256 hash; amount and nonce are encoded as big-endian uint256
/// words.
pub fn redemption_digest(
    chain_id: &str,
    contract: &Addr,
    recipient: &Addr,
    amount: u128,
    nonce: u64,
) -> [u8; 32] {
    // 5 slots of 32 bytes
    let mut data = [0u8; 160];

    data[0..32].copy_from_slice(&keccak256(chain_id.as_bytes()));
    data[32..64].copy_from_slice(&keccak256(contract.as_str().as_bytes()));
    data[64..96].copy_from_slice(&keccak256(recipient.as_str().as_bytes()));

    // uint256 amount - left-padded to 32 bytes, big-endian
    // u128 (16 bytes) goes into bytes 16-31 of the slot
    let amount_bytes = amount.to_be_bytes();
    data[96 + 16..128].copy_from_slice(&amount_bytes);

    // uint256 nonce - left-padded to 32 bytes, big-endian
    // u64 (8 bytes) goes into bytes 24-31 of the slot
    let nonce_bytes = nonce.to_be_bytes();
    data[128 + 24..160].copy_from_slice(&nonce_bytes);

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
