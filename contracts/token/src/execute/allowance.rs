//! Allowance handlers.
//!
//! Allowances are keyed by (owner, spender); each pair is independent.
//! `Approve` overwrites, the increase/decrease pair adjusts relative to the
//! current value.

use cosmwasm_std::{DepsMut, MessageInfo, Response, StdError, Uint128};

use crate::error::ContractError;
use crate::state::ALLOWANCES;

/// Set the allowance for a spender to exactly `amount`.
pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender_addr), &amount)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount))
}

/// Raise the allowance for a spender by `amount`.
pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .unwrap_or_default();
    let updated = current.checked_add(amount).map_err(StdError::overflow)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender_addr), &updated)?;

    Ok(Response::new()
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("allowance", updated))
}

/// Lower the allowance for a spender by `amount`.
pub fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .unwrap_or_default();
    if amount > current {
        return Err(ContractError::AllowanceUnderflow {
            current,
            requested: amount,
        });
    }
    let updated = current - amount;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender_addr), &updated)?;

    Ok(Response::new()
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("allowance", updated))
}
