//! One-shot finalization: `Open -> Ended(outcome)`.

use crate::errors::Error;
use crate::events;
use crate::math::{checked_add, mul_div_floor};
use crate::storage::*;
use crate::types::*;
use crate::vesting;
use soroban_sdk::{log, token, Address, Env};

/// Classifies `totals` against the caps. Funds are routed only when the soft
/// cap is met, and never more than the hard cap.
pub fn classify(caps: &CapConfig, totals: &SaleTotals, now: u64) -> FinalizationOutcome {
    let soft_cap_reached = totals.raised >= caps.soft_cap;
    let routed = if soft_cap_reached {
        totals.raised.min(caps.hard_cap)
    } else {
        0
    };
    FinalizationOutcome {
        total_at_close: totals.raised,
        bonus_total_at_close: totals.bonus_eligible,
        soft_cap_reached,
        routed,
        ended_at: now,
    }
}

/// `floor(eligible / bonus_total * pool)`. The rounding residue stays in the
/// contract; across all recipients it is below their count in base units.
pub fn bonus_share(
    env: &Env,
    eligible: i128,
    bonus_total: i128,
    pool: i128,
) -> Result<i128, Error> {
    if bonus_total == 0 {
        return Ok(0);
    }
    mul_div_floor(env, eligible, pool, bonus_total)
}

pub fn get_outcome(env: &Env) -> Option<FinalizationOutcome> {
    match get_status(env) {
        SaleStatus::Ended(outcome) => Some(outcome),
        SaleStatus::Open => None,
    }
}

pub fn finalize(env: &Env) -> Result<FinalizationOutcome, Error> {
    let config = get_config(env)?;
    let now = get_ledger_timestamp(env);

    if !config.window.has_closed(now) {
        return Err(Error::SaleNotEnded);
    }
    if let SaleStatus::Ended(_) = get_status(env) {
        return Err(Error::AlreadyEnded);
    }

    let outcome = classify(&config.caps, &get_totals(env), now);
    set_status(env, &SaleStatus::Ended(outcome.clone()));
    log!(
        env,
        "sale finalized",
        outcome.total_at_close,
        outcome.soft_cap_reached
    );

    if !config.vesting.is_empty() {
        let start = config.vesting_start.unwrap_or(now);
        vesting::initialize(env, &config.sale_token, &config.vesting, start)?;
    }

    if outcome.routed > 0 {
        token::Client::new(env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &config.beneficiary,
            &outcome.routed,
        );
    }

    events::sale_ended(env, outcome.total_at_close, outcome.soft_cap_reached, outcome.routed);
    Ok(outcome)
}

/// Sale tokens no contributor can ever claim: the sale supply and bonus pool
/// of a failed sale, or the bonus pool when nobody was bonus-eligible.
pub fn unsold_amount(config: &SaleParams, outcome: &FinalizationOutcome) -> Result<i128, Error> {
    let pool = config.bonus.as_ref().map(|bonus| bonus.pool).unwrap_or(0);
    if !outcome.soft_cap_reached {
        checked_add(config.sale_supply, pool)
    } else if outcome.bonus_total_at_close == 0 {
        Ok(pool)
    } else {
        Ok(0)
    }
}

/// Returns unclaimable sale tokens to `owner`, once, after finalization.
pub fn reclaim_unsold(env: &Env, owner: &Address) -> Result<i128, Error> {
    let config = get_config(env)?;
    let outcome = get_outcome(env).ok_or(Error::SaleNotEnded)?;
    if is_reclaimed(env) {
        return Err(Error::AlreadyReclaimed);
    }

    let amount = unsold_amount(&config, &outcome)?;
    if amount == 0 {
        return Err(Error::NothingToReclaim);
    }

    set_reclaimed(env);
    token::Client::new(env, &config.sale_token).transfer(
        &env.current_contract_address(),
        owner,
        &amount,
    );

    events::unsold_reclaimed(env, owner, amount);
    Ok(amount)
}
