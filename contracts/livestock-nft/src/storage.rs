use soroban_sdk::{Address, Env};

use crate::types::{LivestockToken, StorageKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Token Counter ==========

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::TokenCounter).unwrap_or(0)
}

pub fn increment_token_counter(env: &Env) -> u64 {
    let counter = get_token_counter(env) + 1;
    env.storage().instance().set(&StorageKey::TokenCounter, &counter);
    counter
}

// ========== Tokens ==========

pub fn get_token(env: &Env, token_id: u64) -> Option<LivestockToken> {
    let key = StorageKey::Token(token_id);
    let token = env.storage().persistent().get::<_, LivestockToken>(&key);
    if token.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    token
}

pub fn set_token(env: &Env, token: &LivestockToken) {
    let key = StorageKey::Token(token.token_id);
    env.storage().persistent().set(&key, token);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Balances ==========

pub fn get_balance(env: &Env, owner: &Address) -> u64 {
    let key = StorageKey::Balance(owner.clone());
    env.storage().persistent().get::<_, u64>(&key).unwrap_or(0)
}

fn set_balance(env: &Env, owner: &Address, balance: u64) {
    let key = StorageKey::Balance(owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn increment_balance(env: &Env, owner: &Address) {
    let balance = get_balance(env, owner);
    set_balance(env, owner, balance + 1);
}

pub fn decrement_balance(env: &Env, owner: &Address) {
    let balance = get_balance(env, owner);
    set_balance(env, owner, balance.saturating_sub(1));
}
