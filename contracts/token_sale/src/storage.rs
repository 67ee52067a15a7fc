use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleParams, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleParams) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_status(env: &Env) -> SaleStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(SaleStatus::Open)
}

pub fn set_status(env: &Env, status: &SaleStatus) {
    env.storage().instance().set(&DataKey::Status, status);
}

pub fn get_totals(env: &Env) -> SaleTotals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn set_totals(env: &Env, totals: &SaleTotals) {
    env.storage().instance().set(&DataKey::Totals, totals);
}

pub fn get_contribution(env: &Env, identity: &Address) -> Contribution {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(identity.clone()))
        .unwrap_or_default()
}

pub fn set_contribution(env: &Env, identity: &Address, contribution: &Contribution) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(identity.clone()), contribution);
}

pub fn is_paid(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paid(identity.clone()))
        .unwrap_or(false)
}

pub fn set_paid(env: &Env, identity: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Paid(identity.clone()), &true);
}

pub fn is_reclaimed(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Reclaimed)
        .unwrap_or(false)
}

pub fn set_reclaimed(env: &Env) {
    env.storage().instance().set(&DataKey::Reclaimed, &true);
}

pub fn get_vesting_state(env: &Env) -> VestingState {
    env.storage()
        .instance()
        .get(&DataKey::VestingState)
        .unwrap_or(VestingState::Uninitialized)
}

pub fn set_vesting_state(env: &Env, state: &VestingState) {
    env.storage().instance().set(&DataKey::VestingState, state);
}

pub fn get_vesting_count(env: &Env, beneficiary: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VestingCount(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_vesting_count(env: &Env, beneficiary: &Address, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::VestingCount(beneficiary.clone()), &count);
}

pub fn get_vesting_schedule(env: &Env, beneficiary: &Address, index: u32) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::VestingSchedule(beneficiary.clone(), index))
}

pub fn set_vesting_schedule(env: &Env, beneficiary: &Address, index: u32, schedule: &VestingSchedule) {
    env.storage()
        .persistent()
        .set(&DataKey::VestingSchedule(beneficiary.clone(), index), schedule);
}
