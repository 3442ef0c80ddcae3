//! Error types for the Swap Bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only the owner of the contract can perform this operation")]
    Unauthorized,

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance {
        balance: Uint128,
        required: Uint128,
    },

    #[error("Signature is invalid")]
    InvalidSignature,

    #[error("Tokens have been already redeemed")]
    AlreadyRedeemed,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Unknown token contract: {got}")]
    UnknownToken { got: String },
}
