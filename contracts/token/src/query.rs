//! Query handlers for the Holdfast Token contract.
//!
//! All queries are pure reads. `Balance` and `TokenInfo` answer with the
//! cw20 response types so existing cw20 tooling can read this token.

use cosmwasm_std::{Deps, StdResult, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::msg::{
    AllowanceResponse, AntiDumpResponse, BurnedTokensResponse, ConfigResponse,
    LockResponse, LockedBalanceResponse, OwnerResponse,
};
use crate::state::{ALLOWANCES, BALANCES, BURNED, CONFIG, LOCKS, TOKEN_INFO};

/// Query token metadata and total supply.
pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let token_info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token_info.name,
        symbol: token_info.symbol,
        decimals: token_info.decimals,
        total_supply: token_info.total_supply,
    })
}

/// Query an account's balance (0 for unknown accounts).
pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

/// Query the remaining allowance for an (owner, spender) pair.
pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender_addr))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

/// Query the cumulative burned amount.
pub fn query_burned_tokens(deps: Deps) -> StdResult<BurnedTokensResponse> {
    let amount = BURNED.load(deps.storage)?;
    Ok(BurnedTokensResponse { amount })
}

/// Query an account's locked amount.
///
/// The recorded amount is reported even after the unlock time has passed;
/// only `UnlockBalance` clears it.
pub fn query_locked_balance(deps: Deps, account: String) -> StdResult<LockedBalanceResponse> {
    let addr = deps.api.addr_validate(&account)?;
    let amount = LOCKS
        .may_load(deps.storage, &addr)?
        .map(|lock| lock.amount)
        .unwrap_or(Uint128::zero());
    Ok(LockedBalanceResponse {
        account: addr,
        amount,
    })
}

/// Query an account's full lock record, if any.
pub fn query_lock(deps: Deps, account: String) -> StdResult<Option<LockResponse>> {
    let addr = deps.api.addr_validate(&account)?;
    let lock = LOCKS.may_load(deps.storage, &addr)?;
    Ok(lock.map(|lock| LockResponse {
        amount: lock.amount,
        unlock_time: lock.unlock_time,
    }))
}

/// Query whether the anti-dump throttle is active.
pub fn query_anti_dump(deps: Deps) -> StdResult<AntiDumpResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(AntiDumpResponse {
        enabled: config.anti_dump_enabled,
    })
}

/// Query the current owner (absent once renounced).
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        anti_dump_enabled: config.anti_dump_enabled,
    })
}
