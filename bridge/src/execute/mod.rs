//! Execute handlers for the Swap Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `admin` - Owner-gated Mint and Burn handlers
//! - `swap` - Outbound swap handlers (direct and CW20 receive hook)
//! - `redeem` - Validator-attested redemption handler

mod admin;
mod redeem;
mod swap;

pub use admin::*;
pub use redeem::*;
pub use swap::*;

use cosmwasm_std::{Addr, Deps, StdResult, Uint128};

/// Query an account's balance on the token ledger.
pub(crate) fn token_balance(deps: Deps, token: &Addr, account: &Addr) -> StdResult<Uint128> {
    let resp: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &cw20::Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(resp.balance)
}
