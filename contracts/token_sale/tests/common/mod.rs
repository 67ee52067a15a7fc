#![allow(dead_code)]

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, Address, BytesN, Env, Symbol, TryFromVal, Val, Vec,
};
use token_sale::{CapConfig, SaleParams, SaleWindow, TokenSaleContract, TokenSaleContractClient};

pub const START: u64 = 1_000;
pub const END: u64 = START + 86_400;
pub const SALE_SUPPLY: i128 = 20_000_000;

pub struct SaleTest<'a> {
    pub env: &'a Env,
    pub client: TokenSaleContractClient<'a>,
    pub contract_id: Address,
    pub owner: Address,
    pub beneficiary: Address,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
    pub sale_token: token::Client<'a>,
}

fn create_token<'a>(env: &Env) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let admin = Address::generate(env);
    let address = env.register_stellar_asset_contract_v2(admin).address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

/// Open sale over `[START, END]` with soft cap 5 and hard cap 10, no
/// per-transaction bounds, no bonus and no vesting. `customize` adjusts the
/// parameters before deployment.
pub fn deploy<'a>(env: &'a Env, customize: impl FnOnce(&mut SaleParams)) -> SaleTest<'a> {
    env.mock_all_auths();

    let owner = Address::generate(env);
    let beneficiary = Address::generate(env);
    let (payment, payment_admin) = create_token(env);
    let (sale_token, sale_admin) = create_token(env);

    let mut params = SaleParams {
        payment_token: payment.address.clone(),
        sale_token: sale_token.address.clone(),
        beneficiary: beneficiary.clone(),
        window: SaleWindow { start: START, end: END },
        caps: CapConfig {
            soft_cap: 5,
            hard_cap: 10,
            min_contribution: None,
            max_contribution: None,
            max_per_identity: None,
        },
        allowlist_root: None,
        sale_supply: SALE_SUPPLY,
        bonus: None,
        vesting: Vec::new(env),
        vesting_start: None,
    };
    customize(&mut params);

    sale_admin.mint(&owner, &params.required_funding().unwrap());

    let contract_id = env.register_contract(None, TokenSaleContract);
    let client = TokenSaleContractClient::new(env, &contract_id);
    client.initialize(&owner, &params);

    SaleTest {
        env,
        client,
        contract_id,
        owner,
        beneficiary,
        payment,
        payment_admin,
        sale_token,
    }
}

impl<'a> SaleTest<'a> {
    pub fn warp(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    /// A fresh identity holding `balance` payment tokens.
    pub fn contributor(&self, balance: i128) -> Address {
        let who = Address::generate(self.env);
        self.payment_admin.mint(&who, &balance);
        who
    }

    pub fn contribute(&self, who: &Address, amount: i128) -> i128 {
        self.client.contribute(who, &amount, &Vec::new(self.env))
    }

    pub fn contribute_with_proof(&self, who: &Address, amount: i128, proof: &Vec<BytesN<32>>) -> i128 {
        self.client.contribute(who, &amount, proof)
    }

    /// Topic symbol and data of the last event this sale published.
    pub fn last_event(&self) -> (Symbol, Val) {
        let events = self.env.events().all();
        let mut last = None;
        for (contract, topics, data) in events.iter() {
            if contract == self.contract_id {
                last = Some((topics, data));
            }
        }
        let (topics, data) = last.expect("no event from the sale contract");
        let topic = Symbol::try_from_val(self.env, &topics.get(0).unwrap()).unwrap();
        (topic, data)
    }

    /// Data of the last event this sale published under `topic`.
    pub fn event_data(&self, topic: Symbol) -> Option<Val> {
        let mut found = None;
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.contract_id {
                continue;
            }
            if let Some(first) = topics.get(0) {
                if Symbol::try_from_val(self.env, &first).map_or(false, |s| s == topic) {
                    found = Some(data);
                }
            }
        }
        found
    }
}
