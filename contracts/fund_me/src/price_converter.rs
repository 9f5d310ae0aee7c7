use crate::types::FundMeError;
use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Latest round as reported by an aggregator v3 style feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Read surface the ledger needs from its oracle. Any contract exporting
/// these functions can be injected as the price feed.
#[contractclient(name = "AggregatorClient")]
pub trait AggregatorV3Interface {
    fn latest_round_data(env: Env) -> RoundData;
    fn decimals(env: Env) -> u32;
    fn version(env: Env) -> u32;
}

/// Current answer and its decimal scale.
pub fn get_price(env: &Env, price_feed: &Address) -> Result<(i128, u32), FundMeError> {
    let feed = AggregatorClient::new(env, price_feed);

    let answer = match feed.try_latest_round_data() {
        Ok(Ok(round)) => round.answer,
        _ => return Err(FundMeError::PriceUnavailable),
    };
    if answer <= 0 {
        return Err(FundMeError::PriceUnavailable);
    }

    let decimals = match feed.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(FundMeError::PriceUnavailable),
    };

    Ok((answer, decimals))
}

/// Converts `amount` of the native token into the reference currency,
/// keeping the amount's own decimal scale.
pub fn get_conversion_rate(
    env: &Env,
    price_feed: &Address,
    amount: i128,
) -> Result<i128, FundMeError> {
    let (answer, decimals) = get_price(env, price_feed)?;
    convert(amount, answer, decimals)
}

pub fn convert(amount: i128, answer: i128, decimals: u32) -> Result<i128, FundMeError> {
    let scale = 10i128
        .checked_pow(decimals)
        .ok_or(FundMeError::ArithmeticOverflow)?;

    amount
        .checked_mul(answer)
        .map(|value| value / scale)
        .ok_or(FundMeError::ArithmeticOverflow)
}

pub fn get_version(env: &Env, price_feed: &Address) -> Result<u32, FundMeError> {
    match AggregatorClient::new(env, price_feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(FundMeError::PriceUnavailable),
    }
}

