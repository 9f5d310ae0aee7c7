use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InsufficientContribution = 3,
    NotOwner = 4,
    IndexOutOfRange = 5,
    TransferFailure = 6,
    PriceUnavailable = 7,
    ArithmeticOverflow = 8,
}

/// Fixed at initialization; nothing rewrites it afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub price_feed: Address,
    pub native_token: Address,
    pub minimum_usd: i128, // 50 USD in the native token's decimals
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Epoch,                      // u32, bumped by every withdrawal
    FunderCount,                // u32 entries in the current epoch's list
    Funder(u32, u32),           // (epoch, index) -> Address
    AmountFunded(u32, Address), // (epoch, funder) -> i128
}
