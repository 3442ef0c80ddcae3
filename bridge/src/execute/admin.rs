//! Owner-gated mint and burn handlers.

use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::token_balance;
use crate::state::CONFIG;

/// Execute handler for minting tokens to an account (owner only).
pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let recipient = deps.api.addr_validate(&to)?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("method", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// Execute handler for burning tokens from an account (owner only).
///
/// The debited account must have granted the bridge an allowance on the
/// token ledger; the ledger enforces it when the burn message executes.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let from_addr = deps.api.addr_validate(&from)?;

    let balance = token_balance(deps.as_ref(), &config.token, &from_addr)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }

    let burn_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: from_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "burn")
        .add_attribute("from", from_addr)
        .add_attribute("amount", amount.to_string()))
}
