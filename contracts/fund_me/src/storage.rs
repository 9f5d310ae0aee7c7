use crate::types::{Config, DataKey, FundMeError};
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<Config, FundMeError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(FundMeError::NotInitialized)
}

/// Generation of the ledger. Entries written under older epochs are
/// unreachable.
pub fn get_epoch(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Epoch).unwrap_or(0)
}

pub fn funder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::FunderCount)
        .unwrap_or(0)
}

pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    if index >= funder_count(env) {
        return None;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Funder(get_epoch(env), index))
}

pub fn push_funder(env: &Env, funder: &Address) -> Result<(), FundMeError> {
    let count = funder_count(env);
    let next = count.checked_add(1).ok_or(FundMeError::ArithmeticOverflow)?;

    env.storage()
        .persistent()
        .set(&DataKey::Funder(get_epoch(env), count), funder);
    env.storage().instance().set(&DataKey::FunderCount, &next);
    Ok(())
}

pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(get_epoch(env), funder.clone()))
        .unwrap_or(0)
}

pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::AmountFunded(get_epoch(env), funder.clone()), &amount);
}

/// Empties the contributor list and zeroes every balance in one step by
/// moving to a fresh epoch.
pub fn reset_ledger(env: &Env) -> Result<(), FundMeError> {
    let next = get_epoch(env)
        .checked_add(1)
        .ok_or(FundMeError::ArithmeticOverflow)?;

    env.storage().instance().set(&DataKey::Epoch, &next);
    env.storage().instance().set(&DataKey::FunderCount, &0u32);
    Ok(())
}
