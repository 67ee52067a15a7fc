//! Pull-based payouts after finalization.
//!
//! Each identity is paid at most once: tokens when the soft cap was met, a
//! full refund of its contribution otherwise. Already-paid identities and
//! identities without a contribution are skipped without error. The host
//! applies a call all-or-nothing, so a failed transfer leaves the whole batch
//! unpaid.

use crate::errors::Error;
use crate::events;
use crate::math::{checked_add, mul_div_floor};
use crate::settlement::{bonus_share, get_outcome};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{log, token, Address, Env, Vec};

/// Sale tokens owed to a contributor of a successful sale.
pub fn token_entitlement(
    env: &Env,
    config: &SaleParams,
    outcome: &FinalizationOutcome,
    contribution: &Contribution,
) -> Result<i128, Error> {
    if outcome.total_at_close == 0 {
        return Ok(0);
    }
    let base = mul_div_floor(
        env,
        contribution.amount,
        config.sale_supply,
        outcome.total_at_close,
    )?;
    let bonus = match &config.bonus {
        Some(bonus) => bonus_share(
            env,
            contribution.bonus_eligible,
            outcome.bonus_total_at_close,
            bonus.pool,
        )?,
        None => 0,
    };
    checked_add(base, bonus)
}

/// What `identity` would receive from `distribute`, ignoring whether it was
/// already paid.
pub fn entitlement(env: &Env, identity: &Address) -> Result<i128, Error> {
    let config = get_config(env)?;
    let outcome = get_outcome(env).ok_or(Error::SaleNotEnded)?;
    let contribution = get_contribution(env, identity);
    if outcome.soft_cap_reached {
        token_entitlement(env, &config, &outcome, &contribution)
    } else {
        Ok(contribution.amount)
    }
}

/// Pays every unpaid contributor in `identities`; returns how many were paid.
pub fn distribute(env: &Env, identities: &Vec<Address>) -> Result<u32, Error> {
    let config = get_config(env)?;
    let outcome = get_outcome(env).ok_or(Error::SaleNotEnded)?;
    let contract = env.current_contract_address();

    let (asset, refunding) = if outcome.soft_cap_reached {
        (config.sale_token.clone(), false)
    } else {
        (config.payment_token.clone(), true)
    };
    let client = token::Client::new(env, &asset);

    let mut paid = 0u32;
    for identity in identities.iter() {
        if is_paid(env, &identity) {
            log!(env, "already paid", identity.clone());
            continue;
        }
        let contribution = get_contribution(env, &identity);
        if contribution.amount == 0 {
            continue;
        }

        let amount = if refunding {
            contribution.amount
        } else {
            token_entitlement(env, &config, &outcome, &contribution)?
        };

        set_paid(env, &identity);
        if amount > 0 {
            client.transfer(&contract, &identity, &amount);
        }
        events::distributed(env, &identity, amount, refunding);
        paid += 1;
    }
    Ok(paid)
}
