#![no_std]
use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String};

mod storage;
pub mod types;

use storage::Storage;
use types::{Config, PriceFeedError, RoundData};

/// Interface revision reported by `version`.
const VERSION: u32 = 4;

/// Round-based price aggregator. Development networks deploy it in place of
/// a live oracle; the admin posts answers and consumers read the latest round.
#[contract]
pub struct PriceFeedAggregator;

#[contractimpl]
impl PriceFeedAggregator {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        initial_answer: i128,
        description: String,
    ) -> Result<(), PriceFeedError> {
        if Storage::has_config(&env) {
            return Err(PriceFeedError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = Config {
            admin,
            decimals,
            description,
            paused: false,
        };
        Storage::set_config(&env, &config);

        Self::post_answer(&env, initial_answer)?;
        Ok(())
    }

    /// Starts a new round carrying `answer`, stamped with the ledger time.
    pub fn update_answer(env: Env, answer: i128) -> Result<u64, PriceFeedError> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        if config.paused {
            return Err(PriceFeedError::Paused);
        }

        Self::post_answer(&env, answer)
    }

    /// Writes an arbitrary round and makes it the latest one.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        updated_at: u64,
        started_at: u64,
    ) -> Result<(), PriceFeedError> {
        let config = Storage::get_config(&env)?;
        config.admin.require_auth();

        if config.paused {
            return Err(PriceFeedError::Paused);
        }

        let data = RoundData {
            round_id,
            answer,
            started_at,
            updated_at,
            answered_in_round: round_id,
        };
        Storage::set_round(&env, &data);
        Storage::set_latest_round(&env, round_id);

        env.events()
            .publish((symbol_short!("price"), symbol_short!("updated")), (round_id, answer));
        Ok(())
    }

    pub fn latest_round_data(env: Env) -> Result<RoundData, PriceFeedError> {
        let config = Storage::get_config(&env)?;
        if config.paused {
            return Err(PriceFeedError::Paused);
        }

        let latest = Storage::get_latest_round(&env);
        Storage::get_round(&env, latest).ok_or(PriceFeedError::NotFound)
    }

    pub fn latest_answer(env: Env) -> Result<i128, PriceFeedError> {
        Ok(Self::latest_round_data(env)?.answer)
    }

    pub fn latest_round(env: Env) -> Result<u64, PriceFeedError> {
        Storage::get_config(&env)?;
        Ok(Storage::get_latest_round(&env))
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, PriceFeedError> {
        Storage::get_config(&env)?;
        Storage::get_round(&env, round_id).ok_or(PriceFeedError::NotFound)
    }

    pub fn decimals(env: Env) -> Result<u32, PriceFeedError> {
        Ok(Storage::get_config(&env)?.decimals)
    }

    pub fn description(env: Env) -> Result<String, PriceFeedError> {
        Ok(Storage::get_config(&env)?.description)
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn pause(env: Env) -> Result<(), PriceFeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        config.paused = true;
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), PriceFeedError> {
        let mut config = Storage::get_config(&env)?;
        config.admin.require_auth();
        config.paused = false;
        Storage::set_config(&env, &config);
        Ok(())
    }

    fn post_answer(env: &Env, answer: i128) -> Result<u64, PriceFeedError> {
        let round_id = Storage::get_latest_round(env)
            .checked_add(1)
            .ok_or(PriceFeedError::RoundOverflow)?;
        let now = env.ledger().timestamp();

        let data = RoundData {
            round_id,
            answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        };
        Storage::set_round(env, &data);
        Storage::set_latest_round(env, round_id);

        log!(env, "price feed round posted", round_id, answer);
        env.events()
            .publish((symbol_short!("price"), symbol_short!("updated")), (round_id, answer));
        Ok(round_id)
    }
}
