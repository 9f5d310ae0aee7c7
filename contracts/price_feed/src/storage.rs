use crate::types::{Config, DataKey, PriceFeedError, RoundData};
use soroban_sdk::Env;

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, PriceFeedError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(PriceFeedError::NotInitialized)
    }

    pub fn get_latest_round(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LatestRound)
            .unwrap_or(0)
    }

    pub fn set_latest_round(env: &Env, round_id: u64) {
        env.storage().instance().set(&DataKey::LatestRound, &round_id);
    }

    pub fn set_round(env: &Env, data: &RoundData) {
        env.storage()
            .persistent()
            .set(&DataKey::Round(data.round_id), data);
    }

    pub fn get_round(env: &Env, round_id: u64) -> Option<RoundData> {
        env.storage().persistent().get(&DataKey::Round(round_id))
    }
}
