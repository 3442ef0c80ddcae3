//! Message types for the Swap Bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for the privileged mint/burn operations.
    /// Defaults to the instantiating sender.
    pub owner: Option<String>,
    /// Address of the CW20 token ledger this bridge administers.
    /// The bridge must be configured as the token's minter.
    pub token: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Mint tokens to an account
    ///
    /// Authorization: Owner only
    Mint {
        /// Recipient address on this chain
        to: String,
        /// Amount to mint
        amount: Uint128,
    },

    /// Burn tokens from an account. The holder must have granted the bridge
    /// an allowance on the token ledger.
    ///
    /// Authorization: Owner only
    Burn {
        /// Account to debit
        from: String,
        /// Amount to burn
        amount: Uint128,
    },

    /// Initiate an outbound swap: burns the caller's tokens and emits a swap
    /// record for the off-chain validator. The caller must have granted the
    /// bridge an allowance on the token ledger.
    ///
    /// Authorization: Anyone holding tokens
    Swap {
        /// Recipient account on the destination chain (opaque to this bridge)
        to: String,
        /// Amount to swap
        amount: Uint128,
        /// Destination chain id
        dest_chain_id: u64,
        /// Caller-supplied operation nonce. Uniqueness across swaps is the
        /// caller's responsibility; this contract only emits it.
        nonce: u64,
    },

    /// Initiate an outbound swap by sending CW20 tokens to the bridge
    /// (implements the CW20 receiver interface). The swap amount is the
    /// amount sent; the received tokens are burned.
    Receive(cw20::Cw20ReceiveMsg),

    /// Redeem a validator-attested swap: verifies the validator's signature
    /// over the redemption digest, marks the digest consumed, and mints the
    /// amount to the recipient.
    ///
    /// Authorization: Anyone (typically relayed by the recipient)
    Redeem {
        /// Claimed validator address (20-byte hex) that signed the digest
        validator: String,
        /// Recipient address on this chain
        to: String,
        /// Amount to mint
        amount: Uint128,
        /// Signature recovery value (27 or 28)
        v: u8,
        /// Signature r component (32 bytes)
        r: Binary,
        /// Signature s component (32 bytes, lower half of the curve order)
        s: Binary,
        /// Operation nonce, bound into the signed digest
        nonce: u64,
    },
}

/// CW20 receive hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Swap the sent tokens to an account on another chain
    Swap {
        to: String,
        dest_chain_id: u64,
        nonce: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the address of the token ledger this bridge administers
    #[returns(TokenAddressResponse)]
    TokenAddress {},

    /// Check whether a redemption has already been consumed
    #[returns(RedeemedResponse)]
    Redeemed {
        to: String,
        amount: Uint128,
        nonce: u64,
    },

    /// Compute the redemption digest a validator must sign to authorize a
    /// redemption on this deployment
    #[returns(RedemptionDigestResponse)]
    RedemptionDigest {
        to: String,
        amount: Uint128,
        nonce: u64,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
}

#[cw_serde]
pub struct TokenAddressResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct RedeemedResponse {
    pub redeemed: bool,
}

#[cw_serde]
pub struct RedemptionDigestResponse {
    /// The 32-byte digest to sign (raw, before the personal-message prefix)
    pub digest: Binary,
}
