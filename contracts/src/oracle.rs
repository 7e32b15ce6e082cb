//! Price oracle collaborator.
//!
//! The market never stores or caches prices. `resolve` asks the oracle once
//! through a fallible cross-contract call, so a trapping oracle surfaces as
//! an error instead of aborting the invocation.

use soroban_sdk::{contractclient, contracttype, Address, Env, String};

use crate::errors::ContractError;

/// Price answer in the shape Reflector-style feeds return it.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// Interface every settlement oracle must expose.
///
/// `pair` is forwarded as a hint for multi-asset feeds; single-pair feeds
/// ignore it. The oracle address is what decides the price source.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn get_price(env: Env, pair: String) -> Option<PriceData>;
}

/// Queries `oracle` for a settlement price valid at or after `not_before`.
pub(crate) fn fetch_settlement_price(
    env: &Env,
    oracle: &Address,
    pair: &String,
    not_before: u64,
) -> Result<PriceData, ContractError> {
    let client = PriceOracleClient::new(env, oracle);

    let data = match client.try_get_price(pair) {
        Ok(Ok(Some(data))) => data,
        _ => return Err(ContractError::OracleUnavailable),
    };

    if data.price <= 0 {
        return Err(ContractError::InvalidPrice);
    }

    if data.timestamp < not_before {
        return Err(ContractError::StalePrice);
    }

    Ok(data)
}
