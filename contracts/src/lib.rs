#![no_std]
//! # Binary Options Market
//!
//! Soroban contract for a single binary option on an asset pair.
//! Participants stake LONG (settles above strike) or SHORT (settles below)
//! during the trading window; after expiry anyone may resolve the market
//! against the configured price oracle, and winners withdraw the combined
//! pool pro rata.
//!
//! ## Key Features
//! - Half-open trading window `[trading_start, expiry)`
//! - One-shot resolution; oracle failures leave the market retryable
//! - Checked arithmetic, truncating pro-rata payouts
//! - Refunds on a tie (VOID) or an unbacked winning side

mod access;
mod contract;
mod errors;
mod events;
mod oracle;
mod payout;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{BinaryOptionsContract, BinaryOptionsContractClient};
pub use errors::ContractError;
pub use events::{BetPlacedEvent, ClaimedEvent, MarketCreatedEvent, MarketResolvedEvent};
pub use oracle::{PriceData, PriceOracle, PriceOracleClient};
pub use payout::{outcome_for, payout_for};
pub use types::{ClaimReceipt, DataKey, MarketConfig, Outcome, Pools, Resolution, Side, Stake};
