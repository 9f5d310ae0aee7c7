#![no_std]

mod price_converter;
mod storage;
pub mod types;

use soroban_sdk::{contract, contractimpl, log, symbol_short, token, Address, Env};
use crate::storage::*;
use crate::types::*;

/// Minimum contribution per `fund` call, in whole reference-currency units.
const MINIMUM_USD: i128 = 50;

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Fixes the owner, the price feed and the native token. The owner must
    /// sign the call.
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
    ) -> Result<(), FundMeError> {
        if has_config(&env) {
            return Err(FundMeError::AlreadyInitialized);
        }
        owner.require_auth();

        let decimals = token::Client::new(&env, &native_token).decimals();
        let minimum_usd = 10i128
            .checked_pow(decimals)
            .and_then(|scale| scale.checked_mul(MINIMUM_USD))
            .ok_or(FundMeError::ArithmeticOverflow)?;

        let config = Config {
            owner,
            price_feed,
            native_token,
            minimum_usd,
        };
        set_config(&env, &config);
        Ok(())
    }

    /// Credits `amount` of the native token to `funder` if it is worth at
    /// least the minimum at the current oracle price.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        funder.require_auth();
        let config = get_config(&env)?;

        let value = price_converter::get_conversion_rate(&env, &config.price_feed, amount)?;
        if value < config.minimum_usd {
            return Err(FundMeError::InsufficientContribution);
        }

        let funded = get_amount_funded(&env, &funder)
            .checked_add(amount)
            .ok_or(FundMeError::ArithmeticOverflow)?;

        let token_client = token::Client::new(&env, &config.native_token);
        token_client.transfer(&funder, &env.current_contract_address(), &amount);

        set_amount_funded(&env, &funder, funded);
        push_funder(&env, &funder)?;

        log!(&env, "funded", funder, amount, value);
        env.events()
            .publish((symbol_short!("funded"), funder), amount);
        Ok(())
    }

    /// Resets the ledger and sends the whole balance to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), FundMeError> {
        Self::drain(&env, caller)
    }

    /// Same effect and cost as `withdraw`.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), FundMeError> {
        Self::drain(&env, caller)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, FundMeError> {
        Ok(get_config(&env)?.price_feed)
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        get_amount_funded(&env, &funder)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        funder_at(&env, index).ok_or(FundMeError::IndexOutOfRange)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        funder_count(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, FundMeError> {
        Ok(get_config(&env)?.owner)
    }

    pub fn get_minimum_usd(env: Env) -> Result<i128, FundMeError> {
        Ok(get_config(&env)?.minimum_usd)
    }

    /// Reference-currency value of `amount` at the current oracle price.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundMeError> {
        let config = get_config(&env)?;
        price_converter::get_conversion_rate(&env, &config.price_feed, amount)
    }

    pub fn get_version(env: Env) -> Result<u32, FundMeError> {
        let config = get_config(&env)?;
        price_converter::get_version(&env, &config.price_feed)
    }
}

impl FundMe {
    // Ledger state is cleared before the outbound transfer. A failed transfer
    // returns an error and the host rolls the whole call back.
    fn drain(env: &Env, caller: Address) -> Result<(), FundMeError> {
        let config = get_config(env)?;
        caller.require_auth();
        if caller != config.owner {
            return Err(FundMeError::NotOwner);
        }

        let cleared = funder_count(env);
        reset_ledger(env)?;

        let token_client = token::Client::new(env, &config.native_token);
        let contract = env.current_contract_address();
        let balance = token_client.balance(&contract);
        if balance > 0 {
            match token_client.try_transfer(&contract, &config.owner, &balance) {
                Ok(Ok(())) => {}
                _ => return Err(FundMeError::TransferFailure),
            }
        }

        log!(env, "withdrawn", cleared, balance);
        env.events()
            .publish((symbol_short!("withdrawn"), config.owner), balance);
        Ok(())
    }
}
