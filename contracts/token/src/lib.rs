//! Holdfast Token (HOLD) - CW20-style token with transfer controls
//!
//! A fixed-supply token ledger with three transfer-control policies layered
//! on top of the usual balance/allowance bookkeeping:
//!
//! # Anti-Dump Throttle
//! 1. Holders owning >= 0.5% of the total supply are "significant"
//! 2. A significant holder's single transfer is capped at 20% of their
//!    current balance
//! 3. One throttled transfer per rolling 24-hour window
//! 4. The contract owner is exempt (initial distribution must not trip it)
//! 5. The owner can disable the throttle permanently; there is no re-enable
//!
//! # Balance Locking
//! 1. A holder locks part of their balance for a whole number of days
//! 2. The locked portion cannot be transferred until explicitly unlocked
//! 3. A lock can be replaced, but its unlock time can never move earlier
//! 4. Expiry does not clear the lock; `UnlockBalance` does
//!
//! # Ownership
//! - Single owner gating `DisableAntiDump` and ownership changes
//! - `RenounceOwnership` is terminal: owner-gated operations fail forever
//!
//! # Burning
//! Transfers to the reserved null account destroy the tokens and add to the
//! cumulative burned counter. `sum(balances) + burned == total_supply` holds
//! in every reachable state.

pub mod contract;
pub mod error;
mod execute;
pub mod guard;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::{NULL_ACCOUNT, TOKEN_DECIMALS};
