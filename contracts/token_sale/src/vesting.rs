//! Cliff + linear vesting for the fixed allocation pools.
//!
//! Schedules are created exactly once, in one batch, and keyed by
//! `(beneficiary, index)` where `index` counts that beneficiary's schedules
//! from zero. Releases always pay the schedule's beneficiary, so anyone may
//! trigger them.

use crate::errors::Error;
use crate::events;
use crate::math::{checked_add, checked_sub, mul_div_floor};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{log, token, Address, Env, Vec};

impl VestingSchedule {
    /// Total unlocked at `now`, released or not.
    pub fn vested_at(&self, env: &Env, now: u64) -> Result<i128, Error> {
        let cliff_end = self.start_time.saturating_add(self.cliff);
        if now < cliff_end {
            return Ok(0);
        }
        let elapsed = now - self.start_time;
        if elapsed >= self.duration {
            return Ok(self.total_amount);
        }
        mul_div_floor(env, self.total_amount, elapsed as i128, self.duration as i128)
    }

    pub fn releasable_at(&self, env: &Env, now: u64) -> Result<i128, Error> {
        let vested = self.vested_at(env, now)?;
        Ok(checked_sub(vested, self.released_amount)?.max(0))
    }
}

pub fn validate_allocation(allocation: &VestingAllocation) -> bool {
    allocation.amount > 0
        && allocation.immediate >= 0
        && allocation.immediate <= allocation.amount
        && allocation.duration > 0
        && allocation.cliff <= allocation.duration
}

/// Seeds one schedule per allocation starting at `start`. The immediate part
/// of each allocation is paid out in `token` now; the schedule vests the rest.
pub fn initialize(
    env: &Env,
    token: &Address,
    allocations: &Vec<VestingAllocation>,
    start: u64,
) -> Result<u32, Error> {
    if let VestingState::Initialized(_) = get_vesting_state(env) {
        return Err(Error::VestingAlreadyInitialized);
    }

    let client = token::Client::new(env, token);
    let mut created = 0u32;
    for allocation in allocations.iter() {
        if !validate_allocation(&allocation) {
            return Err(Error::InvalidConfig);
        }
        let index = get_vesting_count(env, &allocation.beneficiary);
        let schedule = VestingSchedule {
            beneficiary: allocation.beneficiary.clone(),
            total_amount: checked_sub(allocation.amount, allocation.immediate)?,
            start_time: start,
            cliff: allocation.cliff,
            duration: allocation.duration,
            released_amount: 0,
        };
        set_vesting_schedule(env, &allocation.beneficiary, index, &schedule);
        set_vesting_count(env, &allocation.beneficiary, index + 1);
        created += 1;

        if allocation.immediate > 0 {
            client.transfer(
                &env.current_contract_address(),
                &allocation.beneficiary,
                &allocation.immediate,
            );
        }
    }

    set_vesting_state(env, &VestingState::Initialized(start));
    events::vesting_initialized(env, created);
    Ok(created)
}

pub fn releasable(env: &Env, beneficiary: &Address, index: u32, now: u64) -> Result<i128, Error> {
    let schedule = get_vesting_schedule(env, beneficiary, index).ok_or(Error::ScheduleNotFound)?;
    schedule.releasable_at(env, now)
}

pub fn release(env: &Env, beneficiary: &Address, index: u32) -> Result<i128, Error> {
    let config = get_config(env)?;
    let mut schedule =
        get_vesting_schedule(env, beneficiary, index).ok_or(Error::ScheduleNotFound)?;

    let amount = schedule.releasable_at(env, get_ledger_timestamp(env))?;
    if amount == 0 {
        log!(env, "nothing to release", beneficiary.clone(), index);
        return Ok(0);
    }

    schedule.released_amount = checked_add(schedule.released_amount, amount)?;
    set_vesting_schedule(env, beneficiary, index, &schedule);

    token::Client::new(env, &config.sale_token).transfer(
        &env.current_contract_address(),
        beneficiary,
        &amount,
    );

    events::tokens_released(env, beneficiary, index, amount);
    Ok(amount)
}
