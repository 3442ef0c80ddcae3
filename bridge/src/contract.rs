//! Swap Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_burn, execute_mint, execute_receive, execute_redeem, execute_swap};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_redeemed, query_redemption_digest, query_token_address};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        owner: owner.clone(),
        token: token.clone(),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("token", token))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { to, amount } => execute_mint(deps, info, to, amount),
        ExecuteMsg::Burn { from, amount } => execute_burn(deps, info, from, amount),
        ExecuteMsg::Swap {
            to,
            amount,
            dest_chain_id,
            nonce,
        } => execute_swap(deps, info, to, amount, dest_chain_id, nonce),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::Redeem {
            validator,
            to,
            amount,
            v,
            r,
            s,
            nonce,
        } => execute_redeem(deps, env, info, validator, to, amount, v, r, s, nonce),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenAddress {} => to_json_binary(&query_token_address(deps)?),
        QueryMsg::Redeemed { to, amount, nonce } => {
            to_json_binary(&query_redeemed(deps, env, to, amount, nonce)?)
        }
        QueryMsg::RedemptionDigest { to, amount, nonce } => {
            to_json_binary(&query_redemption_digest(deps, env, to, amount, nonce)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
