//! State definitions for the Holdfast Token contract
//!
//! This module defines the storage structures for the ledger, the allowance
//! registry, and the balance locks. The anti-dump throttle keeps its own
//! per-account state in `guard`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Structures
// ============================================================================

/// Immutable token metadata and the fixed total supply
#[cw_serde]
pub struct TokenInfo {
    /// Token name (e.g. "Holdfast Token")
    pub name: String,
    /// Ticker symbol (e.g. "HOLD")
    pub symbol: String,
    /// Always `TOKEN_DECIMALS`; stored for cw20-compatible queries
    pub decimals: u8,
    /// Minted once at instantiation, never changes afterward
    pub total_supply: Uint128,
}

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Current owner; `None` once ownership has been renounced (terminal)
    pub owner: Option<Addr>,
    /// Whether the anti-dump throttle is active (one-way transition to false)
    pub anti_dump_enabled: bool,
}

/// A holder-managed time lock on part of a balance
///
/// The record stays in place after `unlock_time` passes; the locked amount
/// keeps being enforced until the holder calls `UnlockBalance`.
#[cw_serde]
pub struct BalanceLock {
    /// Locked amount (at most the holder's balance at lock time)
    pub amount: Uint128,
    /// Unlock timestamp in unix seconds
    pub unlock_time: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 version info
pub const CONTRACT_NAME: &str = "crates.io:holdfast-token";

/// Contract version for cw2 version info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed decimal places; all amounts are scaled by 10^18
pub const TOKEN_DECIMALS: u8 = 18;

/// Reserved sentinel for "no account". Transfers to it burn the tokens; it
/// can never be a transfer source and never accrues a balance.
pub const NULL_ACCOUNT: &str = "null";

/// Seconds in one lock-duration day
pub const SECONDS_PER_DAY: u64 = 86_400;

// ============================================================================
// Storage
// ============================================================================

/// Token metadata and total supply
pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Owner and throttle flag
pub const CONFIG: Item<Config> = Item::new("config");

/// Account balances
/// Key: holder address, Value: balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Delegated spending approvals
/// Key: (owner, spender), Value: remaining approved amount
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// Balance locks
/// Key: holder address, Value: lock record (absent = nothing locked)
pub const LOCKS: Map<&Addr, BalanceLock> = Map::new("locks");

/// Cumulative amount sent to the null account; monotonically increasing
pub const BURNED: Item<Uint128> = Item::new("burned");
