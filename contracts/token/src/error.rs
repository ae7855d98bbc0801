//! Error types for the Holdfast Token contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    NotOwner,

    #[error("Invalid owner: {reason}")]
    InvalidOwner { reason: String },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient unlocked balance: available {available}, requested {requested}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Insufficient allowance: approved {allowance}, requested {requested}")]
    InsufficientAllowance {
        allowance: Uint128,
        requested: Uint128,
    },

    #[error("Allowance cannot decrease below zero: current {current}, requested decrease {requested}")]
    AllowanceUnderflow {
        current: Uint128,
        requested: Uint128,
    },

    #[error("The null account cannot be the source of a transfer")]
    InvalidSource,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Anti-Dump Guard Errors
    // ========================================================================

    #[error("Anti-dump throttle exceeded: {reason}")]
    ThrottleExceeded { reason: String },

    // ========================================================================
    // Balance Lock Errors
    // ========================================================================

    #[error("Invalid lock duration: {reason}")]
    InvalidDuration { reason: String },

    #[error("Lock cannot be shortened: current unlock at {current}, requested {requested}")]
    LockCannotShorten { current: u64, requested: u64 },

    #[error("Lock still active: {remaining_seconds} seconds remaining")]
    LockStillActive { remaining_seconds: u64 },
}
