//! Query handlers for the Swap Bridge contract.

use cosmwasm_std::{Binary, Deps, Env, StdResult, Uint128};

use crate::hash::redemption_digest;
use crate::msg::{
    ConfigResponse, RedeemedResponse, RedemptionDigestResponse, TokenAddressResponse,
};
use crate::state::{CONFIG, REDEMPTIONS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token: config.token,
    })
}

/// Query the address of the token ledger this bridge administers.
pub fn query_token_address(deps: Deps) -> StdResult<TokenAddressResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenAddressResponse {
        token: config.token,
    })
}

/// Query whether a redemption key has already been consumed.
pub fn query_redeemed(
    deps: Deps,
    env: Env,
    to: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<RedeemedResponse> {
    let recipient = deps.api.addr_validate(&to)?;
    let digest = redemption_digest(
        &env.block.chain_id,
        &env.contract.address,
        &recipient,
        amount.u128(),
        nonce,
    );
    let redeemed = REDEMPTIONS.may_load(deps.storage, &digest)?.unwrap_or(false);
    Ok(RedeemedResponse { redeemed })
}

/// Compute the redemption digest for this deployment without storing it.
/// This is the 32-byte message the validator signs (before the
/// personal-message prefix is applied).
pub fn query_redemption_digest(
    deps: Deps,
    env: Env,
    to: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<RedemptionDigestResponse> {
    let recipient = deps.api.addr_validate(&to)?;
    let digest = redemption_digest(
        &env.block.chain_id,
        &env.contract.address,
        &recipient,
        amount.u128(),
        nonce,
    );
    Ok(RedemptionDigestResponse {
        digest: Binary::from(digest.to_vec()),
    })
}
