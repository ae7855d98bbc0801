//! Holdfast Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `guard` - Anti-dump throttle policy

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_decrease_allowance, execute_disable_anti_dump,
    execute_increase_allowance, execute_lock_balance, execute_renounce_ownership,
    execute_transfer, execute_transfer_from, execute_transfer_ownership, execute_unlock_balance,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_anti_dump, query_balance, query_burned_tokens, query_config,
    query_lock, query_locked_balance, query_owner, query_token_info,
};
use crate::state::{
    Config, TokenInfo, BALANCES, BURNED, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOKEN_DECIMALS,
    TOKEN_INFO,
};

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

    if msg.initial_supply.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "initial supply must be greater than zero".to_string(),
        });
    }

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: TOKEN_DECIMALS,
        total_supply: msg.initial_supply,
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    // The instantiating account receives the whole supply and becomes owner
    let config = Config {
        owner: Some(info.sender.clone()),
        anti_dump_enabled: true,
    };
    CONFIG.save(deps.storage, &config)?;

    BALANCES.save(deps.storage, &info.sender, &msg.initial_supply)?;
    BURNED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("name", token_info.name)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("total_supply", token_info.total_supply))
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
        // Ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),

        // Allowances
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }

        // Balance locking
        ExecuteMsg::LockBalance { amount, days } => {
            execute_lock_balance(deps, env, info, amount, days)
        }
        ExecuteMsg::UnlockBalance {} => execute_unlock_balance(deps, env, info),

        // Administration
        ExecuteMsg::DisableAntiDump {} => execute_disable_anti_dump(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::RenounceOwnership {} => execute_renounce_ownership(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::BurnedTokens {} => to_json_binary(&query_burned_tokens(deps)?),
        QueryMsg::LockedBalance { account } => {
            to_json_binary(&query_locked_balance(deps, account)?)
        }
        QueryMsg::Lock { account } => to_json_binary(&query_lock(deps, account)?),
        QueryMsg::AntiDump {} => to_json_binary(&query_anti_dump(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}
