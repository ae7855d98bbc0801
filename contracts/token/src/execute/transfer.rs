//! Transfer handlers.
//!
//! Both entry points funnel into `settle_transfer`, which runs the shared
//! check sequence (null source, unlocked balance, anti-dump guard) and then
//! applies all effects. Checks complete before the first write, so a failed
//! transfer leaves storage untouched even outside a transactional host.

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::guard;
use crate::state::{ALLOWANCES, BALANCES, BURNED, CONFIG, LOCKS, NULL_ACCOUNT, TOKEN_INFO};

enum Destination {
    Burn,
    Account(Addr),
}

/// Move tokens from the sender to a recipient (or burn them).
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    settle_transfer(deps, &env, info.sender, &recipient, amount)
}

/// Move tokens on behalf of `owner`, spending the sender's allowance.
pub fn execute_transfer_from(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    // The null account never holds a real balance; rejected regardless of
    // any allowance that may have been granted against it
    if owner == NULL_ACCOUNT {
        return Err(ContractError::InvalidSource);
    }
    let owner_addr = deps.api.addr_validate(&owner)?;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &info.sender))?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            allowance,
            requested: amount,
        });
    }

    let res = settle_transfer(deps.branch(), &env, owner_addr.clone(), &recipient, amount)?;
    ALLOWANCES.save(
        deps.storage,
        (&owner_addr, &info.sender),
        &(allowance - amount),
    )?;

    Ok(res.add_attribute("spender", info.sender))
}

/// Shared settlement: check the source, the lock, and the guard, then move
/// the tokens. Lock and guard checks always run against the source account.
fn settle_transfer(
    deps: DepsMut,
    env: &Env,
    from: Addr,
    recipient: &str,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if from.as_str() == NULL_ACCOUNT {
        return Err(ContractError::InvalidSource);
    }

    // Resolve the destination before touching state
    let dest = if recipient == NULL_ACCOUNT {
        Destination::Burn
    } else {
        Destination::Account(deps.api.addr_validate(recipient)?)
    };

    let config = CONFIG.load(deps.storage)?;
    let token_info = TOKEN_INFO.load(deps.storage)?;

    let balance = BALANCES.may_load(deps.storage, &from)?.unwrap_or_default();
    let locked = LOCKS
        .may_load(deps.storage, &from)?
        .map(|lock| lock.amount)
        .unwrap_or_default();
    let available = balance.saturating_sub(locked);
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            requested: amount,
        });
    }

    let throttled = guard::check_transfer(
        deps.storage,
        env,
        &config,
        token_info.total_supply,
        &from,
        balance,
        amount,
    )?;

    // All checks passed; apply the effects
    BALANCES.save(deps.storage, &from, &(balance - amount))?;

    let res = Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", from.as_str())
        .add_attribute("amount", amount);

    let res = match dest {
        Destination::Burn => {
            let total_burned = BURNED.load(deps.storage)? + amount;
            BURNED.save(deps.storage, &total_burned)?;
            res.add_attribute("to", NULL_ACCOUNT)
                .add_attribute("total_burned", total_burned)
        }
        Destination::Account(to) => {
            let to_balance = BALANCES.may_load(deps.storage, &to)?.unwrap_or_default();
            BALANCES.save(deps.storage, &to, &(to_balance + amount))?;
            res.add_attribute("to", to)
        }
    };

    if throttled {
        guard::record_throttled_transfer(deps.storage, env, &from)?;
    }

    Ok(res)
}
