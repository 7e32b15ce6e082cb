//! Test modules for the binary options market contract.


use crate::contract::{BinaryOptionsContract, BinaryOptionsContractClient};
use crate::oracle::PriceData;
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events as _, Ledger as _},
    token, Address, Env, String, Val, Vec,
};

pub(crate) const STRIKE: i128 = 3000;
pub(crate) const TRADING_START: u64 = 1_626_323_473;
pub(crate) const EXPIRY: u64 = 1_627_187_473;

#[contracttype]
#[derive(Clone)]
pub enum MockOracleKey {
    Price,
    Queries,
    LastPair,
}

/// Stand-in price feed: answers whatever was last set and counts queries.
#[contract]
pub struct MockOracle;

#[contractimpl]
impl MockOracle {
    pub fn set_price(env: Env, price: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&MockOracleKey::Price, &PriceData { price, timestamp });
    }

    pub fn clear_price(env: Env) {
        env.storage().instance().remove(&MockOracleKey::Price);
    }

    pub fn queries(env: Env) -> u32 {
        env.storage().instance().get(&MockOracleKey::Queries).unwrap_or(0)
    }

    pub fn last_pair(env: Env) -> Option<String> {
        env.storage().instance().get(&MockOracleKey::LastPair)
    }

    pub fn get_price(env: Env, pair: String) -> Option<PriceData> {
        let queries: u32 = env.storage().instance().get(&MockOracleKey::Queries).unwrap_or(0);
        env.storage().instance().set(&MockOracleKey::Queries, &(queries + 1));
        env.storage().instance().set(&MockOracleKey::LastPair, &pair);
        env.storage().instance().get(&MockOracleKey::Price)
    }
}

/// A registered market with its oracle and stake token, not yet initialized.
pub(crate) struct TestMarket<'a> {
    pub env: &'a Env,
    pub contract_id: Address,
    pub client: BinaryOptionsContractClient<'a>,
    pub oracle: MockOracleClient<'a>,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub owner: Address,
}

impl<'a> TestMarket<'a> {
    pub fn new(env: &'a Env) -> Self {
        env.mock_all_auths();

        let contract_id = env.register(BinaryOptionsContract, ());
        let client = BinaryOptionsContractClient::new(env, &contract_id);

        let oracle_id = env.register(MockOracle, ());
        let oracle = MockOracleClient::new(env, &oracle_id);

        let issuer = Address::generate(env);
        let asset = env.register_stellar_asset_contract_v2(issuer);
        let token = token::Client::new(env, &asset.address());
        let token_admin = token::StellarAssetClient::new(env, &asset.address());

        let owner = Address::generate(env);

        TestMarket {
            env,
            contract_id,
            client,
            oracle,
            token,
            token_admin,
            owner,
        }
    }

    /// Market on "eth/usd" with the clock at trading start
    pub fn initialized(env: &'a Env) -> Self {
        let market = Self::new(env);
        market.client.initialize_with_pair(
            &market.oracle.address,
            &EXPIRY,
            &STRIKE,
            &TRADING_START,
            &market.owner,
            &market.token.address,
            &String::from_str(env, "eth/usd"),
        );
        market.set_time(TRADING_START);
        market
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = timestamp;
        });
    }

    pub fn participant(&self, balance: i128) -> Address {
        let user = Address::generate(self.env);
        self.token_admin.mint(&user, &balance);
        user
    }

    /// Events published by the market contract itself, oldest first
    pub fn market_events(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let mut events = Vec::new(self.env);
        for event in self.env.events().all().iter() {
            if event.0 == self.contract_id {
                events.push_back(event);
            }
        }
        events
    }

    /// The most recent market event, or an empty list
    pub fn last_market_event(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let events = self.market_events();
        events.slice(events.len().saturating_sub(1)..)
    }

    /// Moves past expiry and resolves against `price`
    pub fn settle_at(&self, price: i128) {
        self.set_time(EXPIRY);
        self.oracle.set_price(&price, &EXPIRY);
        self.client.resolve();
    }
}
