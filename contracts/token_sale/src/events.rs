use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn allowlist_root_changed(env: &Env, new_root: &BytesN<32>) {
    env.events()
        .publish((symbol_short!("root_chg"),), new_root.clone());
}

pub fn contribution_recorded(env: &Env, identity: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("contrib"), identity.clone()), amount);
}

pub fn sale_ended(env: &Env, total_at_close: i128, soft_cap_reached: bool, routed: i128) {
    env.events().publish(
        (symbol_short!("sale_end"),),
        (total_at_close, soft_cap_reached, routed),
    );
}

pub fn distributed(env: &Env, identity: &Address, amount: i128, refunded: bool) {
    env.events()
        .publish((symbol_short!("distrib"), identity.clone()), (amount, refunded));
}

pub fn vesting_initialized(env: &Env, schedules: u32) {
    env.events()
        .publish((symbol_short!("vest_init"),), schedules);
}

pub fn unsold_reclaimed(env: &Env, owner: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("reclaimed"), owner.clone()), amount);
}

pub fn tokens_released(env: &Env, beneficiary: &Address, index: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("released"), beneficiary.clone(), index),
        amount,
    );
}
