//! Type definitions for the binary options market.

use soroban_sdk::{contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Pools,
    Resolution,
    TotalPaid,
    Stake(Address),
    ClaimReceipt(Address),
}

/// Which side of the strike a participant backs
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Long,
    Short,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Unresolved,
    LongWins,
    ShortWins,
    Void,
}

impl Outcome {
    pub fn is_resolved(&self) -> bool {
        *self != Outcome::Unresolved
    }
}

/// Immutable market parameters, fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketConfig {
    pub pair: String,        // Cosmetic label, e.g. "eth/usd"
    pub strike: i128,        // Oracle price units
    pub trading_start: u64,  // Unix seconds, inclusive
    pub expiry: u64,         // Unix seconds, exclusive end of trading
    pub oracle: Address,
    pub owner: Address,
    pub stake_token: Address,
}

/// Per-side totals of outstanding stakes
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pools {
    pub long: i128,
    pub short: i128,
}

/// A participant's open stake on each side
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stake {
    pub long: i128,
    pub short: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub settlement_price: i128,
    pub price_timestamp: u64, // As reported by the oracle
    pub resolved_at: u64,     // Ledger time of the resolve call
    pub pools: Pools,         // Totals the payouts are computed against
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ClaimReceipt {
    pub payout: i128,
    pub claimed_at: u64,
}
