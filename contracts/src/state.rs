//! Market storage: immutable configuration plus mutable accounting.
//!
//! Everything here is plain reads and writes. Lifecycle rules live in the
//! contract entry points; the only validation performed here is the
//! construction-time check on `MarketConfig`.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::types::{ClaimReceipt, DataKey, MarketConfig, Outcome, Pools, Resolution, Side, Stake};

const DAY_IN_LEDGERS: u32 = 17280;
const BUMP_THRESHOLD: u32 = 14 * DAY_IN_LEDGERS;
const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

impl MarketConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.strike <= 0 {
            return Err(ContractError::InvalidStrike);
        }

        if self.expiry <= self.trading_start {
            return Err(ContractError::InvalidWindow);
        }

        Ok(())
    }

    /// Half-open trading window `[trading_start, expiry)`
    pub fn is_trading_open(&self, now: u64) -> bool {
        now >= self.trading_start && now < self.expiry
    }
}

impl Pools {
    pub fn on(&self, side: Side) -> i128 {
        match side {
            Side::Long => self.long,
            Side::Short => self.short,
        }
    }

    pub fn total(&self) -> Result<i128, ContractError> {
        self.long.checked_add(self.short).ok_or(ContractError::Overflow)
    }

    pub fn credit(&mut self, side: Side, amount: i128) -> Result<(), ContractError> {
        let slot = match side {
            Side::Long => &mut self.long,
            Side::Short => &mut self.short,
        };
        *slot = slot.checked_add(amount).ok_or(ContractError::Overflow)?;
        Ok(())
    }

    /// Removes a settled stake from the outstanding totals
    pub fn debit(&mut self, stake: &Stake) -> Result<(), ContractError> {
        self.long = self.long.checked_sub(stake.long).ok_or(ContractError::Overflow)?;
        self.short = self.short.checked_sub(stake.short).ok_or(ContractError::Overflow)?;
        Ok(())
    }
}

impl Stake {
    pub fn on(&self, side: Side) -> i128 {
        match side {
            Side::Long => self.long,
            Side::Short => self.short,
        }
    }

    pub fn total(&self) -> Result<i128, ContractError> {
        self.long.checked_add(self.short).ok_or(ContractError::Overflow)
    }

    pub fn is_empty(&self) -> bool {
        self.long == 0 && self.short == 0
    }

    pub fn credit(&mut self, side: Side, amount: i128) -> Result<(), ContractError> {
        let slot = match side {
            Side::Long => &mut self.long,
            Side::Short => &mut self.short,
        };
        *slot = slot.checked_add(amount).ok_or(ContractError::Overflow)?;
        Ok(())
    }
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub(crate) fn config(env: &Env) -> Result<MarketConfig, ContractError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)?;
    extend_instance(env);
    Ok(config)
}

pub(crate) fn set_config(env: &Env, config: &MarketConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().set(&DataKey::Pools, &Pools::default());
    env.storage().instance().set(&DataKey::TotalPaid, &0i128);
    extend_instance(env);
}

pub(crate) fn pools(env: &Env) -> Pools {
    env.storage()
        .instance()
        .get(&DataKey::Pools)
        .unwrap_or_default()
}

pub(crate) fn set_pools(env: &Env, pools: &Pools) {
    env.storage().instance().set(&DataKey::Pools, pools);
}

pub(crate) fn resolution(env: &Env) -> Option<Resolution> {
    env.storage().instance().get(&DataKey::Resolution)
}

pub(crate) fn outcome(env: &Env) -> Outcome {
    resolution(env)
        .map(|r| r.outcome)
        .unwrap_or(Outcome::Unresolved)
}

pub(crate) fn set_resolution(env: &Env, resolution: &Resolution) {
    env.storage().instance().set(&DataKey::Resolution, resolution);
}

pub(crate) fn total_paid(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalPaid)
        .unwrap_or(0)
}

pub(crate) fn set_total_paid(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalPaid, &total);
}

/// Returns `None` for addresses that never staked.
pub(crate) fn stake(env: &Env, participant: &Address) -> Option<Stake> {
    let key = DataKey::Stake(participant.clone());
    let stake = env.storage().persistent().get(&key);
    if stake.is_some() {
        extend_persistent(env, &key);
    }
    stake
}

pub(crate) fn set_stake(env: &Env, participant: &Address, stake: &Stake) {
    let key = DataKey::Stake(participant.clone());
    env.storage().persistent().set(&key, stake);
    extend_persistent(env, &key);
}

pub(crate) fn claim_receipt(env: &Env, participant: &Address) -> Option<ClaimReceipt> {
    env.storage()
        .persistent()
        .get(&DataKey::ClaimReceipt(participant.clone()))
}

pub(crate) fn set_claim_receipt(env: &Env, participant: &Address, receipt: &ClaimReceipt) {
    let key = DataKey::ClaimReceipt(participant.clone());
    env.storage().persistent().set(&key, receipt);
    extend_persistent(env, &key);
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_AMOUNT);
}
