//! Cap policy: total supply never passes the cap fixed at initialization.

use soroban_sdk::Env;

use crate::errors::{reject, TokenError};
use crate::storage::DataKey;

/// Supply after minting `amount`, or `CapExceeded` if that would pass `cap`.
/// An addition that overflows `u128` is necessarily above the cap.
pub fn check_mint(current_supply: u128, amount: u128, cap: u128) -> Result<u128, TokenError> {
    match current_supply.checked_add(amount) {
        Some(supply) if supply <= cap => Ok(supply),
        _ => Err(TokenError::CapExceeded),
    }
}

/// Validate the configured cap against the supply minted at initialization.
pub fn validate_cap(cap: u128, initial_supply: u128) -> Result<(), TokenError> {
    if cap == 0 {
        return Err(TokenError::InvalidCap);
    }
    check_mint(0, initial_supply, cap).map(|_| ())
}

pub fn read_cap(env: &Env) -> Result<u128, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Cap)
        .ok_or_else(|| reject(env, TokenError::NotInitialized))
}

pub(crate) fn write_cap(env: &Env, cap: u128) {
    env.storage().instance().set(&DataKey::Cap, &cap);
}
