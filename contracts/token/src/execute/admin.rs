//! Admin operations handlers.
//!
//! This module handles:
//! - Disabling the anti-dump throttle (one-way)
//! - Ownership transfer and renouncement

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, NULL_ACCOUNT};

fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    match &config.owner {
        Some(owner) if owner == sender => Ok(()),
        _ => Err(ContractError::NotOwner),
    }
}

/// Permanently disable the anti-dump throttle. There is no re-enable path.
pub fn execute_disable_anti_dump(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.anti_dump_enabled = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "disable_anti_dump"))
}

/// Hand ownership to a new (non-null) account.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if new_owner == NULL_ACCOUNT {
        return Err(ContractError::InvalidOwner {
            reason: "ownership cannot be transferred to the null account".to_string(),
        });
    }
    let new_owner_addr = deps.api.addr_validate(&new_owner)?;

    config.owner = Some(new_owner_addr.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_ownership")
        .add_attribute("new_owner", new_owner_addr))
}

/// Give up ownership forever. Owner-gated operations fail permanently
/// afterwards; the owner reads as absent.
pub fn execute_renounce_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.owner = None;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "renounce_ownership"))
}
