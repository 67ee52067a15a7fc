use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub start: u64,
    pub end: u64,
}

impl SaleWindow {
    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start
    }

    /// The window is inclusive of `end`; finalization needs `now > end`.
    pub fn has_closed(&self, now: u64) -> bool {
        now > self.end
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CapConfig {
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub min_contribution: Option<i128>, // per transaction
    pub max_contribution: Option<i128>, // per transaction
    pub max_per_identity: Option<i128>, // cumulative
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusConfig {
    pub pool: i128,  // sale tokens shared pro-rata among bonus-eligible contributions
    pub cutoff: u64, // contributions accepted at or before this instant are eligible
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingAllocation {
    pub beneficiary: Address,
    pub amount: i128,
    pub immediate: i128, // part of `amount` paid out when schedules are seeded
    pub cliff: u64,      // seconds after start before anything unlocks
    pub duration: u64,   // seconds after start until fully unlocked
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub payment_token: Address,
    pub sale_token: Address,
    pub beneficiary: Address,
    pub window: SaleWindow,
    pub caps: CapConfig,
    pub allowlist_root: Option<BytesN<32>>,
    pub sale_supply: i128,
    pub bonus: Option<BonusConfig>,
    pub vesting: Vec<VestingAllocation>,
    pub vesting_start: Option<u64>,
}

impl SaleParams {
    /// Sale tokens the contract must hold to back every payout it can make.
    pub fn required_funding(&self) -> Option<i128> {
        let mut total = self.sale_supply;
        if let Some(bonus) = &self.bonus {
            total = total.checked_add(bonus.pool)?;
        }
        for allocation in self.vesting.iter() {
            total = total.checked_add(allocation.amount)?;
        }
        Some(total)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Contribution {
    pub amount: i128,
    pub bonus_eligible: i128,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleTotals {
    pub raised: i128,
    pub bonus_eligible: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizationOutcome {
    pub total_at_close: i128,
    pub bonus_total_at_close: i128,
    pub soft_cap_reached: bool,
    pub routed: i128, // payment tokens sent to the beneficiary
    pub ended_at: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Open,
    Ended(FinalizationOutcome),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VestingState {
    Uninitialized,
    Initialized(u64),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub beneficiary: Address,
    pub total_amount: i128,
    pub start_time: u64,
    pub cliff: u64,
    pub duration: u64,
    pub released_amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Status,
    Totals,
    Contribution(Address),
    Paid(Address),
    Reclaimed,
    VestingState,
    VestingCount(Address),
    VestingSchedule(Address, u32),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
