//! Swap Bridge Contract - Validator-Attested Lock/Mint Token Bridging
//!
//! This contract administers a CW20 token ledger and authorizes cross-chain
//! token movement against the signature of a single off-chain validator key.
//!
//! # Outbound Flow (Swap)
//! 1. A holder swaps tokens, which burns them on this chain and emits a swap
//!    record (recipient, amount, destination chain id, nonce)
//! 2. The off-chain validator observes the record and signs the redemption
//!    digest for the destination chain
//!
//! # Inbound Flow (Redeem)
//! 1. Anyone submits the validator's (v, r, s) signature together with the
//!    redemption parameters
//! 2. The contract recovers the signer from the digest, rejects mismatches
//!    and consumed digests, and mints to the recipient
//!
//! # Security
//! - Ethereum personal-message signing convention for validator signatures
//! - Signature malleability variants (non-canonical v, high s) rejected
//! - Replay protection keyed by the full redemption digest, which binds
//!   recipient, amount, nonce, chain id, and contract address

pub mod contract;
pub mod crypto;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
mod query;
pub mod state;

pub use crate::crypto::{personal_digest, recover_signer, ETH_MESSAGE_PREFIX};
pub use crate::error::ContractError;
pub use crate::hash::{keccak256, redemption_digest};
