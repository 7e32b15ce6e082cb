//! Owner gate. The owner is fixed at initialization and has no say over
//! bets, resolution or payouts.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::state;

pub(crate) fn owner(env: &Env) -> Result<Address, ContractError> {
    Ok(state::config(env)?.owner)
}

/// Loads the owner and demands its signature on the current invocation.
pub(crate) fn require_owner(env: &Env) -> Result<Address, ContractError> {
    let owner = owner(env)?;
    owner.require_auth();
    Ok(owner)
}
