//! Contract error types for the binary options market.
//!
//! Codes are grouped by failure class so clients can branch on ranges:
//! configuration (1-9), betting (10-19), lifecycle state (20-29),
//! oracle (30-39) and accounting (40-49).

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Market has already been initialized
    AlreadyInitialized = 1,
    /// Strike price must be greater than zero
    InvalidStrike = 2,
    /// Expiry must be strictly after trading start
    InvalidWindow = 3,

    /// Bet amount must be greater than zero
    InvalidAmount = 10,
    /// Trading window has not opened yet
    BettingNotOpen = 11,
    /// Trading window closed at expiry
    BettingClosed = 12,

    /// Market not initialized - call initialize first
    NotInitialized = 20,
    /// Resolution attempted before expiry
    NotExpired = 21,
    /// Market already carries a terminal outcome
    AlreadyResolved = 22,
    /// Claim attempted before resolution
    NotResolved = 23,

    /// Oracle call trapped or returned no price
    OracleUnavailable = 30,
    /// Oracle returned a non-positive price
    InvalidPrice = 31,
    /// Oracle price predates expiry
    StalePrice = 32,

    /// Participant has no stake in this market
    NothingToClaim = 40,
    /// Participant already collected a payout
    AlreadyClaimed = 41,
    /// Arithmetic overflow occurred
    Overflow = 42,
}
