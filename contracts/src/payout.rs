//! Side-effect free settlement arithmetic.

use soroban_sdk::{Env, I256};

use crate::errors::ContractError;
use crate::types::{Outcome, Pools, Side, Stake};

/// Strict comparison against the strike; a tie voids the market.
pub fn outcome_for(settlement_price: i128, strike: i128) -> Outcome {
    if settlement_price > strike {
        Outcome::LongWins
    } else if settlement_price < strike {
        Outcome::ShortWins
    } else {
        Outcome::Void
    }
}

/// Amount owed to a participant holding `stake` once the market resolved.
///
/// Winners split the combined pool by their share of the winning pool:
/// `floor(winning_stake * total_pool / winning_pool)`, with the product
/// taken in 256 bits. A void market, or a winning side nobody backed,
/// refunds the participant's own stake.
pub fn payout_for(
    env: &Env,
    stake: &Stake,
    pools: &Pools,
    outcome: Outcome,
) -> Result<i128, ContractError> {
    let winning_side = match outcome {
        Outcome::Unresolved => return Err(ContractError::NotResolved),
        Outcome::Void => return refund(stake),
        Outcome::LongWins => Side::Long,
        Outcome::ShortWins => Side::Short,
    };

    let winning_pool = pools.on(winning_side);
    if winning_pool == 0 {
        return refund(stake);
    }

    let winning_stake = stake.on(winning_side);
    if winning_stake == 0 {
        return Ok(0);
    }

    let total_pool = pools.total()?;
    let share = I256::from_i128(env, winning_stake)
        .mul(&I256::from_i128(env, total_pool))
        .div(&I256::from_i128(env, winning_pool));

    // winning_stake <= winning_pool, so the share never exceeds total_pool
    share.to_i128().ok_or(ContractError::Overflow)
}

fn refund(stake: &Stake) -> Result<i128, ContractError> {
    stake.total()
}
