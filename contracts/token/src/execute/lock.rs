//! Balance lock handlers.
//!
//! A holder voluntarily locks part of their balance for a whole number of
//! days. The locked portion is excluded from every transfer until the holder
//! explicitly unlocks it; passing the unlock time alone releases nothing.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{BalanceLock, BALANCES, LOCKS, SECONDS_PER_DAY};

/// Lock `amount` of the sender's balance for `days` days.
pub fn execute_lock_balance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    days: u64,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "lock amount must be greater than zero".to_string(),
        });
    }
    if days == 0 {
        return Err(ContractError::InvalidDuration {
            reason: "lock duration must be at least one day".to_string(),
        });
    }

    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount > balance {
        return Err(ContractError::InsufficientBalance {
            available: balance,
            requested: amount,
        });
    }

    let unlock_time = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|duration| env.block.time.seconds().checked_add(duration))
        .ok_or_else(|| ContractError::InvalidDuration {
            reason: "lock duration out of range".to_string(),
        })?;

    // A lock may be replaced, but its unlock time never moves earlier
    if let Some(existing) = LOCKS.may_load(deps.storage, &info.sender)? {
        if unlock_time < existing.unlock_time {
            return Err(ContractError::LockCannotShorten {
                current: existing.unlock_time,
                requested: unlock_time,
            });
        }
    }

    LOCKS.save(
        deps.storage,
        &info.sender,
        &BalanceLock {
            amount,
            unlock_time,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "lock_balance")
        .add_attribute("account", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("unlock_time", unlock_time.to_string()))
}

/// Release the sender's lock once its unlock time has been reached.
pub fn execute_unlock_balance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let Some(lock) = LOCKS.may_load(deps.storage, &info.sender)? else {
        // Nothing locked; clearing an absent record succeeds
        return Ok(Response::new()
            .add_attribute("action", "unlock_balance")
            .add_attribute("account", info.sender)
            .add_attribute("amount", Uint128::zero()));
    };

    let now = env.block.time.seconds();
    if now < lock.unlock_time {
        return Err(ContractError::LockStillActive {
            remaining_seconds: lock.unlock_time - now,
        });
    }

    LOCKS.remove(deps.storage, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "unlock_balance")
        .add_attribute("account", info.sender)
        .add_attribute("amount", lock.amount))
}
