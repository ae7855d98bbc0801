//! Message types for the Holdfast Token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate
// ============================================================================

/// Instantiate message
///
/// The full supply is minted once, to the sender, who becomes the contract
/// owner. The anti-dump throttle starts enabled.
#[cw_serde]
pub struct InstantiateMsg {
    /// Token name (e.g. "Holdfast Token")
    pub name: String,
    /// Ticker symbol (e.g. "HOLD")
    pub symbol: String,
    /// Total supply, scaled by 10^18; fixed forever after instantiation
    pub initial_supply: Uint128,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Ledger
    // ========================================================================
    /// Move `amount` from the sender to `recipient`.
    ///
    /// Sending to the reserved null account (`"null"`) burns the tokens.
    /// Subject to the balance lock and, for significant holders, the
    /// anti-dump throttle. A zero amount is a no-op that still passes
    /// through every check.
    Transfer { recipient: String, amount: Uint128 },

    /// Move `amount` from `owner` to `recipient` on the strength of a prior
    /// approval; the sender's allowance is reduced by `amount`.
    ///
    /// The null account is rejected as `owner` regardless of allowance.
    /// Lock and throttle checks apply to `owner`, not the sender.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Allowances
    // ========================================================================
    /// Set the sender's allowance for `spender` to exactly `amount`
    /// (overwrite semantics).
    Approve { spender: String, amount: Uint128 },

    /// Raise the sender's allowance for `spender` by `amount`.
    IncreaseAllowance { spender: String, amount: Uint128 },

    /// Lower the sender's allowance for `spender` by `amount`.
    /// Fails if the allowance would go below zero.
    DecreaseAllowance { spender: String, amount: Uint128 },

    // ========================================================================
    // Balance Locking
    // ========================================================================
    /// Lock `amount` of the sender's balance for `days` days.
    ///
    /// Replaces an existing lock, but the new unlock time must not be
    /// earlier than the current one. The locked portion cannot be
    /// transferred until `UnlockBalance` is called, even after the unlock
    /// time has passed.
    LockBalance { amount: Uint128, days: u64 },

    /// Release the sender's lock. Only valid once the unlock time has been
    /// reached. A no-op when nothing is locked.
    UnlockBalance {},

    // ========================================================================
    // Administration
    // ========================================================================
    /// Permanently disable the anti-dump throttle. There is no re-enable.
    ///
    /// Authorization: Owner only
    DisableAntiDump {},

    /// Hand ownership to `new_owner` (must not be the null account).
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Give up ownership forever. Owner-gated operations fail permanently
    /// afterwards.
    ///
    /// Authorization: Owner only
    RenounceOwnership {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns token metadata and total supply (cw20-compatible)
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    /// Returns an account's balance (cw20-compatible); 0 if unknown
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Returns the remaining allowance for an (owner, spender) pair
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Returns the cumulative amount sent to the null account
    #[returns(BurnedTokensResponse)]
    BurnedTokens {},

    /// Returns an account's locked amount. The amount keeps being reported
    /// after the unlock time passes, until `UnlockBalance` clears it.
    #[returns(LockedBalanceResponse)]
    LockedBalance { account: String },

    /// Returns an account's full lock record, if any
    #[returns(Option<LockResponse>)]
    Lock { account: String },

    /// Returns whether the anti-dump throttle is active
    #[returns(AntiDumpResponse)]
    AntiDump {},

    /// Returns the current owner; absent once ownership was renounced
    #[returns(OwnerResponse)]
    Owner {},

    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct BurnedTokensResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub account: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct LockResponse {
    pub amount: Uint128,
    /// Unlock timestamp in unix seconds
    pub unlock_time: u64,
}

#[cw_serde]
pub struct AntiDumpResponse {
    pub enabled: bool,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Option<Addr>,
    pub anti_dump_enabled: bool,
}
