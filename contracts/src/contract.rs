//! Settlement engine: bet placement, one-shot resolution and pro-rata claims.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

use crate::access;
use crate::errors::ContractError;
use crate::events::{BetPlacedEvent, ClaimedEvent, MarketCreatedEvent, MarketResolvedEvent};
use crate::oracle;
use crate::payout;
use crate::state;
use crate::types::{ClaimReceipt, MarketConfig, Outcome, Pools, Resolution, Side, Stake};

#[contract]
pub struct BinaryOptionsContract;

#[contractimpl]
impl BinaryOptionsContract {
    /// Initializes the market without a pair label (one-time only)
    pub fn initialize(
        env: Env,
        oracle: Address,
        expiry: u64,
        strike: i128,
        trading_start: u64,
        owner: Address,
        stake_token: Address,
    ) -> Result<(), ContractError> {
        let pair = String::from_str(&env, "");
        Self::_initialize(&env, oracle, expiry, strike, trading_start, owner, stake_token, pair)
    }

    /// Initializes the market with a descriptive pair label such as "eth/usd"
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_with_pair(
        env: Env,
        oracle: Address,
        expiry: u64,
        strike: i128,
        trading_start: u64,
        owner: Address,
        stake_token: Address,
        pair: String,
    ) -> Result<(), ContractError> {
        Self::_initialize(&env, oracle, expiry, strike, trading_start, owner, stake_token, pair)
    }

    pub fn get_config(env: Env) -> Result<MarketConfig, ContractError> {
        state::config(&env)
    }

    pub fn get_pair(env: Env) -> Result<String, ContractError> {
        Ok(state::config(&env)?.pair)
    }

    pub fn get_strike(env: Env) -> Result<i128, ContractError> {
        Ok(state::config(&env)?.strike)
    }

    pub fn get_trading_start(env: Env) -> Result<u64, ContractError> {
        Ok(state::config(&env)?.trading_start)
    }

    pub fn get_expiry(env: Env) -> Result<u64, ContractError> {
        Ok(state::config(&env)?.expiry)
    }

    pub fn get_oracle(env: Env) -> Result<Address, ContractError> {
        Ok(state::config(&env)?.oracle)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        access::owner(&env)
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        Ok(state::config(&env)?.stake_token)
    }

    /// Returns the per-side totals of stakes not yet claimed. The totals
    /// payouts are computed against are kept on the resolution record.
    pub fn get_pools(env: Env) -> Pools {
        state::pools(&env)
    }

    /// Returns the participant's open stake (zeroed once claimed)
    pub fn get_stake(env: Env, participant: Address) -> Stake {
        state::stake(&env, &participant).unwrap_or_default()
    }

    pub fn get_outcome(env: Env) -> Outcome {
        state::outcome(&env)
    }

    pub fn get_resolution(env: Env) -> Option<Resolution> {
        state::resolution(&env)
    }

    /// Returns the sum of all payouts made so far
    pub fn get_total_paid(env: Env) -> i128 {
        state::total_paid(&env)
    }

    pub fn get_claim_receipt(env: Env, participant: Address) -> Option<ClaimReceipt> {
        state::claim_receipt(&env, &participant)
    }

    /// True while bets are accepted
    pub fn is_trading_open(env: Env) -> Result<bool, ContractError> {
        let config = state::config(&env)?;
        let open = !state::outcome(&env).is_resolved()
            && config.is_trading_open(env.ledger().timestamp());
        Ok(open)
    }

    /// Stakes `amount` of the stake token on `side`
    pub fn place_bet(
        env: Env,
        participant: Address,
        side: Side,
        amount: i128,
    ) -> Result<(), ContractError> {
        participant.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = state::config(&env)?;

        if state::outcome(&env).is_resolved() {
            return Err(ContractError::AlreadyResolved);
        }

        let now = env.ledger().timestamp();
        if now < config.trading_start {
            return Err(ContractError::BettingNotOpen);
        }
        if now >= config.expiry {
            return Err(ContractError::BettingClosed);
        }

        let mut stake = state::stake(&env, &participant).unwrap_or_default();
        stake.credit(side, amount)?;

        let mut pools = state::pools(&env);
        pools.credit(side, amount)?;
        // Payouts are bounded by the combined pool; it must stay representable
        pools.total()?;

        token::Client::new(&env, &config.stake_token).transfer(
            &participant,
            &env.current_contract_address(),
            &amount,
        );

        state::set_stake(&env, &participant, &stake);
        state::set_pools(&env, &pools);

        log!(&env, "bet placed: {} {} on {}", participant, amount, side);

        BetPlacedEvent {
            participant,
            side,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Settles the market against the oracle price; callable by anyone once
    /// expiry has passed. A failed oracle query leaves the market unresolved
    /// and the call may be retried.
    pub fn resolve(env: Env) -> Result<Outcome, ContractError> {
        let config = state::config(&env)?;

        if state::outcome(&env).is_resolved() {
            return Err(ContractError::AlreadyResolved);
        }

        let now = env.ledger().timestamp();
        if now < config.expiry {
            return Err(ContractError::NotExpired);
        }

        let price = oracle::fetch_settlement_price(&env, &config.oracle, &config.pair, config.expiry)
            .inspect_err(|err| {
                log!(&env, "resolve deferred, oracle error {}", *err as u32);
            })?;

        let outcome = payout::outcome_for(price.price, config.strike);

        state::set_resolution(
            &env,
            &Resolution {
                outcome,
                settlement_price: price.price,
                price_timestamp: price.timestamp,
                resolved_at: now,
                pools: state::pools(&env),
            },
        );

        log!(&env, "market resolved at price {}", price.price);

        MarketResolvedEvent {
            outcome,
            settlement_price: price.price,
        }
        .publish(&env);

        Ok(outcome)
    }

    /// Pays out the participant's share of the pool and zeroes their stake.
    /// A participant whose stake was entirely on the losing side receives
    /// zero, and may repeat the call harmlessly.
    pub fn claim(env: Env, participant: Address) -> Result<i128, ContractError> {
        participant.require_auth();

        let config = state::config(&env)?;

        let resolution = state::resolution(&env).ok_or(ContractError::NotResolved)?;

        if let Some(receipt) = state::claim_receipt(&env, &participant) {
            if receipt.payout == 0 {
                return Ok(0);
            }
            return Err(ContractError::AlreadyClaimed);
        }

        let stake = match state::stake(&env, &participant) {
            Some(stake) if !stake.is_empty() => stake,
            _ => return Err(ContractError::NothingToClaim),
        };

        let payout = payout::payout_for(&env, &stake, &resolution.pools, resolution.outcome)?;

        let mut outstanding = state::pools(&env);
        outstanding.debit(&stake)?;

        let total_paid = state::total_paid(&env)
            .checked_add(payout)
            .ok_or(ContractError::Overflow)?;

        let now = env.ledger().timestamp();
        state::set_stake(&env, &participant, &Stake::default());
        state::set_pools(&env, &outstanding);
        state::set_claim_receipt(
            &env,
            &participant,
            &ClaimReceipt {
                payout,
                claimed_at: now,
            },
        );
        state::set_total_paid(&env, total_paid);

        if payout > 0 {
            token::Client::new(&env, &config.stake_token).transfer(
                &env.current_contract_address(),
                &participant,
                &payout,
            );
        }

        log!(&env, "claimed: {} paid {}", participant, payout);

        ClaimedEvent {
            participant,
            payout,
        }
        .publish(&env);

        Ok(payout)
    }

    /// Keeps the market's storage alive while claims are outstanding (owner only)
    pub fn extend_ttl(env: Env) -> Result<(), ContractError> {
        access::require_owner(&env)?;
        state::extend_instance(&env);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn _initialize(
        env: &Env,
        oracle: Address,
        expiry: u64,
        strike: i128,
        trading_start: u64,
        owner: Address,
        stake_token: Address,
        pair: String,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if state::is_initialized(env) {
            return Err(ContractError::AlreadyInitialized);
        }

        let config = MarketConfig {
            pair,
            strike,
            trading_start,
            expiry,
            oracle,
            owner,
            stake_token,
        };
        config.validate()?;

        state::set_config(env, &config);

        MarketCreatedEvent {
            pair: config.pair,
            strike,
            trading_start,
            expiry,
        }
        .publish(env);

        Ok(())
    }
}
