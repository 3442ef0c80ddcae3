//! Outbound swap handlers.
//!
//! A swap burns the sender's tokens on this chain and emits a swap record.
//! The off-chain validator watches these records to decide which redemptions
//! to sign on the destination chain; nothing about the swap is persisted here
//! beyond the emitted event.

use cosmwasm_std::{from_json, to_json_binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::execute::token_balance;
use crate::msg::ReceiveMsg;
use crate::state::CONFIG;

/// Execute handler for a direct swap. Debits the caller through a CW20
/// `BurnFrom`, so the caller must have granted the bridge an allowance.
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    amount: Uint128,
    dest_chain_id: u64,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let balance = token_balance(deps.as_ref(), &config.token, &info.sender)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }

    let burn_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("method", "swap")
        .add_attribute("sender", info.sender)
        .add_attribute("to", to)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string()))
}

/// Execute handler for swaps initiated through the CW20 receiver interface.
/// The tokens have already moved to the bridge; burn them from our own
/// balance.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Only the configured ledger may deliver receive hooks
    if info.sender != config.token {
        return Err(ContractError::UnknownToken {
            got: info.sender.to_string(),
        });
    }

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::Swap {
            to,
            dest_chain_id,
            nonce,
        } => {
            let amount = cw20_msg.amount;

            let burn_msg = WasmMsg::Execute {
                contract_addr: config.token.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
                funds: vec![],
            };

            Ok(Response::new()
                .add_message(burn_msg)
                .add_attribute("method", "swap")
                .add_attribute("sender", cw20_msg.sender)
                .add_attribute("to", to)
                .add_attribute("amount", amount.to_string())
                .add_attribute("dest_chain_id", dest_chain_id.to_string())
                .add_attribute("nonce", nonce.to_string()))
        }
    }
}
