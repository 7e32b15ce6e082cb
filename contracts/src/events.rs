//! Events published for off-chain indexers.

use soroban_sdk::{contractevent, Address, String};

use crate::types::{Outcome, Side};

#[contractevent(topics = ["market_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketCreatedEvent {
    pub pair: String,
    pub strike: i128,
    pub trading_start: u64,
    pub expiry: u64,
}

#[contractevent(topics = ["bet_placed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetPlacedEvent {
    pub participant: Address,
    pub side: Side,
    pub amount: i128,
}

#[contractevent(topics = ["market_resolved"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketResolvedEvent {
    pub outcome: Outcome,
    pub settlement_price: i128,
}

#[contractevent(topics = ["claimed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub participant: Address,
    pub payout: i128,
}
