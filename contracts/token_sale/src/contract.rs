use crate::errors::Error;
use crate::storage::*;
use crate::types::*;
use crate::{distribution, events, ledger, merkle, settlement, vesting};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, BytesN, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Allowlisted capped sale with pull-based settlement and vesting"
);

fn validate_params(params: &SaleParams) -> Result<i128, Error> {
    let caps = &params.caps;
    if params.window.start >= params.window.end {
        return Err(Error::InvalidConfig);
    }
    if caps.soft_cap <= 0 || caps.soft_cap > caps.hard_cap {
        return Err(Error::InvalidConfig);
    }
    for bound in [caps.min_contribution, caps.max_contribution, caps.max_per_identity]
        .into_iter()
        .flatten()
    {
        if bound <= 0 {
            return Err(Error::InvalidConfig);
        }
    }
    if let (Some(min), Some(max)) = (caps.min_contribution, caps.max_contribution) {
        if min > max {
            return Err(Error::InvalidConfig);
        }
    }
    if params.sale_supply <= 0 {
        return Err(Error::InvalidConfig);
    }
    if let Some(bonus) = &params.bonus {
        if bonus.pool < 0 || bonus.cutoff > params.window.end {
            return Err(Error::InvalidConfig);
        }
    }
    for allocation in params.vesting.iter() {
        if !vesting::validate_allocation(&allocation) {
            return Err(Error::InvalidConfig);
        }
    }
    params.required_funding().ok_or(Error::ArithmeticOverflow)
}

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Configure the sale and move the owner's sale-token funding into custody.
    pub fn initialize(env: Env, owner: Address, params: SaleParams) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let funding = validate_params(&params)?;

        set_config(&env, &params);
        set_owner(&env, &owner);
        set_status(&env, &SaleStatus::Open);
        set_totals(&env, &SaleTotals::default());
        set_vesting_state(&env, &VestingState::Uninitialized);

        token::Client::new(&env, &params.sale_token).transfer(
            &owner,
            &env.current_contract_address(),
            &funding,
        );
        Ok(())
    }

    /// Replace the allowlist commitment. Owner only; open sales stay open.
    pub fn change_allowlist_root(env: Env, new_root: BytesN<32>) -> Result<(), Error> {
        let owner = get_owner(&env)?;
        owner.require_auth();

        let mut config = get_config(&env)?;
        if config.allowlist_root.is_none() {
            return Err(Error::AllowlistNotConfigured);
        }
        config.allowlist_root = Some(new_root.clone());
        set_config(&env, &config);

        events::allowlist_root_changed(&env, &new_root);
        Ok(())
    }

    /// Contribute payment tokens. Returns the accepted amount, which is less
    /// than `amount` when the contribution hits a cap. `proof` is ignored by
    /// open sales.
    pub fn contribute(
        env: Env,
        contributor: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<i128, Error> {
        contributor.require_auth();
        ledger::contribute(&env, &contributor, amount, &proof)
    }

    /// Close the sale. Callable by anyone once the window has passed.
    pub fn finalize(env: Env) -> Result<FinalizationOutcome, Error> {
        settlement::finalize(&env)
    }

    /// Pay out tokens or refunds to the listed identities.
    pub fn distribute(env: Env, identities: Vec<Address>) -> Result<u32, Error> {
        distribution::distribute(&env, &identities)
    }

    /// Return sale tokens that no contributor can claim to the owner.
    pub fn reclaim_unsold(env: Env) -> Result<i128, Error> {
        let owner = get_owner(&env)?;
        owner.require_auth();
        settlement::reclaim_unsold(&env, &owner)
    }

    /// Release whatever is unlocked on a vesting schedule to its beneficiary.
    pub fn release(env: Env, beneficiary: Address, index: u32) -> Result<i128, Error> {
        vesting::release(&env, &beneficiary, index)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleParams, Error> {
        get_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn verify_allowlist(env: Env, identity: Address, proof: Vec<BytesN<32>>) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(match config.allowlist_root {
            Some(root) => merkle::verify(&env, &root, &identity, &proof),
            None => true,
        })
    }

    pub fn get_contribution(env: Env, identity: Address) -> i128 {
        get_contribution(&env, &identity).amount
    }

    pub fn get_bonus_eligible(env: Env, identity: Address) -> i128 {
        get_contribution(&env, &identity).bonus_eligible
    }

    pub fn get_total_raised(env: Env) -> i128 {
        get_totals(&env).raised
    }

    pub fn get_bonus_total(env: Env) -> i128 {
        get_totals(&env).bonus_eligible
    }

    pub fn get_outcome(env: Env) -> Option<FinalizationOutcome> {
        settlement::get_outcome(&env)
    }

    pub fn is_ended(env: Env) -> bool {
        settlement::get_outcome(&env).is_some()
    }

    pub fn soft_cap_reached(env: Env) -> bool {
        settlement::get_outcome(&env)
            .map(|outcome| outcome.soft_cap_reached)
            .unwrap_or(false)
    }

    pub fn entitlement(env: Env, identity: Address) -> Result<i128, Error> {
        distribution::entitlement(&env, &identity)
    }

    pub fn is_paid(env: Env, identity: Address) -> bool {
        is_paid(&env, &identity)
    }

    pub fn is_reclaimed(env: Env) -> bool {
        is_reclaimed(&env)
    }

    pub fn get_vesting_schedule(env: Env, beneficiary: Address, index: u32) -> Option<VestingSchedule> {
        get_vesting_schedule(&env, &beneficiary, index)
    }

    pub fn vesting_schedule_count(env: Env, beneficiary: Address) -> u32 {
        get_vesting_count(&env, &beneficiary)
    }

    pub fn releasable(env: Env, beneficiary: Address, index: u32) -> Result<i128, Error> {
        vesting::releasable(&env, &beneficiary, index, get_ledger_timestamp(&env))
    }
}
