//! Allowance table: what each spender may still move out of a holder's balance.

use soroban_sdk::{Address, Env};

use crate::errors::{reject, TokenError};
use crate::storage::{read_ledger_entry, write_ledger_entry, DataKey};

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    read_ledger_entry(env, &DataKey::Allowance(owner.clone(), spender.clone())).unwrap_or(0)
}

pub fn set(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    write_ledger_entry(env, &key, amount);
}

pub fn increase(
    env: &Env,
    owner: &Address,
    spender: &Address,
    delta: u128,
) -> Result<u128, TokenError> {
    let updated = allowance(env, owner, spender)
        .checked_add(delta)
        .ok_or_else(|| reject(env, TokenError::Overflow))?;
    set(env, owner, spender, updated);
    Ok(updated)
}

pub fn decrease(
    env: &Env,
    owner: &Address,
    spender: &Address,
    delta: u128,
) -> Result<u128, TokenError> {
    let updated = allowance(env, owner, spender)
        .checked_sub(delta)
        .ok_or_else(|| reject(env, TokenError::AllowanceUnderflow))?;
    set(env, owner, spender, updated);
    Ok(updated)
}

/// Check that `spender` may still move `amount` out of `owner`'s balance.
/// Returns what would remain of the allowance; nothing is written.
pub fn ensure_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<u128, TokenError> {
    allowance(env, owner, spender)
        .checked_sub(amount)
        .ok_or_else(|| reject(env, TokenError::InsufficientAllowance))
}

/// Spend `amount` of the allowance `owner` granted to `spender`.
pub fn consume(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<u128, TokenError> {
    let remaining = ensure_allowance(env, owner, spender, amount)?;
    set(env, owner, spender, remaining);
    Ok(remaining)
}
