//! Execute handlers for the Holdfast Token contract.
//!
//! Handlers are organized by component:
//! - `transfer` - Transfer and TransferFrom, including burns to the null account
//! - `allowance` - Approve, IncreaseAllowance, DecreaseAllowance
//! - `lock` - LockBalance and UnlockBalance
//! - `admin` - DisableAntiDump and ownership management

mod admin;
mod allowance;
mod lock;
mod transfer;

pub use admin::*;
pub use allowance::*;
pub use lock::*;
pub use transfer::*;
