//! Validator-attested redemption handler.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::crypto::{eth_address_hex, parse_eth_address, recover_signer};
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, redemption_digest};
use crate::state::{CONFIG, REDEMPTIONS};

/// Execute handler for redeeming a validator-attested swap.
///
/// Verifies the signature over the redemption digest, consumes the digest in
/// the replay set, and mints the amount to the recipient. All three happen in
/// one transaction: if the mint fails downstream, the host rolls back the
/// replay marking with it.
pub fn execute_redeem(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    validator: String,
    to: String,
    amount: Uint128,
    v: u8,
    r: Binary,
    s: Binary,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let recipient = deps.api.addr_validate(&to)?;
    let claimed = parse_eth_address(&validator)?;

    let r: [u8; 32] = r
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidSignature)?;
    let s: [u8; 32] = s
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidSignature)?;

    let digest = redemption_digest(
        &env.block.chain_id,
        &env.contract.address,
        &recipient,
        amount.u128(),
        nonce,
    );

    let recovered = recover_signer(deps.api, &digest, v, &r, &s)?;
    if recovered != claimed {
        return Err(ContractError::InvalidSignature);
    }

    // Check-and-set. Executes are serialized by the host, so no other
    // redemption can interleave between the load and the save.
    if REDEMPTIONS.may_load(deps.storage, &digest)?.unwrap_or(false) {
        return Err(ContractError::AlreadyRedeemed);
    }
    REDEMPTIONS.save(deps.storage, &digest, &true)?;

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
        .add_attribute("method", "redeem")
        .add_attribute("validator", eth_address_hex(&claimed))
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("digest", bytes32_to_hex(&digest)))
}
