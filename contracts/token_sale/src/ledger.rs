//! Contribution ledger: admission, bounds and partial fills.

use crate::errors::Error;
use crate::events;
use crate::math::{checked_add, checked_sub};
use crate::merkle;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{log, token, Address, BytesN, Env, Vec};

/// Amount that can be accepted out of `amount`, given the remaining room under
/// the hard cap and, when configured, under the identity's own cap.
pub fn accepted_amount(
    caps: &CapConfig,
    totals: &SaleTotals,
    current: &Contribution,
    amount: i128,
) -> Result<i128, Error> {
    let cap_room = checked_sub(caps.hard_cap, totals.raised)?;
    if cap_room <= 0 {
        return Err(Error::HardCapReached);
    }
    let mut accepted = amount.min(cap_room);

    if let Some(limit) = caps.max_per_identity {
        let identity_room = checked_sub(limit, current.amount)?;
        if identity_room <= 0 {
            return Err(Error::IdentityCapReached);
        }
        accepted = accepted.min(identity_room);
    }
    Ok(accepted)
}

fn check_bounds(caps: &CapConfig, amount: i128) -> Result<(), Error> {
    if let Some(min) = caps.min_contribution {
        if amount < min {
            return Err(Error::BelowMinimum);
        }
    }
    if let Some(max) = caps.max_contribution {
        if amount > max {
            return Err(Error::AboveMaximum);
        }
    }
    Ok(())
}

pub fn contribute(
    env: &Env,
    identity: &Address,
    amount: i128,
    proof: &Vec<BytesN<32>>,
) -> Result<i128, Error> {
    let config = get_config(env)?;
    let now = get_ledger_timestamp(env);

    if !config.window.has_started(now) {
        return Err(Error::SaleNotStarted);
    }
    if config.window.has_closed(now) {
        return Err(Error::SaleEnded);
    }
    if amount <= 0 {
        return Err(Error::ZeroAmount);
    }
    if let Some(root) = &config.allowlist_root {
        if !merkle::verify(env, root, identity, proof) {
            return Err(Error::InvalidProof);
        }
    }
    check_bounds(&config.caps, amount)?;

    let mut totals = get_totals(env);
    let mut contribution = get_contribution(env, identity);
    let accepted = accepted_amount(&config.caps, &totals, &contribution, amount)?;
    if accepted < amount {
        log!(env, "contribution clamped", identity.clone(), amount, accepted);
    }

    contribution.amount = checked_add(contribution.amount, accepted)?;
    totals.raised = checked_add(totals.raised, accepted)?;
    if let Some(bonus) = &config.bonus {
        if now <= bonus.cutoff {
            contribution.bonus_eligible = checked_add(contribution.bonus_eligible, accepted)?;
            totals.bonus_eligible = checked_add(totals.bonus_eligible, accepted)?;
        }
    }

    set_contribution(env, identity, &contribution);
    set_totals(env, &totals);

    token::Client::new(env, &config.payment_token).transfer(
        identity,
        &env.current_contract_address(),
        &accepted,
    );

    events::contribution_recorded(env, identity, accepted);
    Ok(accepted)
}
