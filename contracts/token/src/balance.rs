//! Balance ledger and total-supply bookkeeping.
//!
//! Total supply is tracked separately from the per-account entries and only
//! moves through [`increase_supply`] / [`decrease_supply`], which mint and
//! burn call alongside [`credit`] / [`debit`].

use soroban_sdk::{Address, Env};

use crate::errors::{reject, TokenError};
use crate::storage::{read_ledger_entry, write_ledger_entry, DataKey};

pub fn balance_of(env: &Env, account: &Address) -> u128 {
    read_ledger_entry(env, &DataKey::Balance(account.clone())).unwrap_or(0)
}

pub fn credit(env: &Env, account: &Address, amount: u128) -> Result<(), TokenError> {
    let balance = balance_of(env, account);
    let new_balance = balance
        .checked_add(amount)
        .ok_or_else(|| reject(env, TokenError::Overflow))?;
    write_ledger_entry(env, &DataKey::Balance(account.clone()), new_balance);
    Ok(())
}

pub fn debit(env: &Env, account: &Address, amount: u128) -> Result<(), TokenError> {
    let new_balance = ensure_balance(env, account, amount)?;
    write_ledger_entry(env, &DataKey::Balance(account.clone()), new_balance);
    Ok(())
}

/// Check that `account` can cover `amount` without writing anything.
/// Returns the balance the account would be left with.
pub fn ensure_balance(env: &Env, account: &Address, amount: u128) -> Result<u128, TokenError> {
    balance_of(env, account)
        .checked_sub(amount)
        .ok_or_else(|| reject(env, TokenError::InsufficientBalance))
}

// ── Total supply ────────────────────────────────────────────────────────

pub fn total_supply(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, supply: u128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn increase_supply(env: &Env, amount: u128) -> Result<u128, TokenError> {
    let supply = total_supply(env)
        .checked_add(amount)
        .ok_or_else(|| reject(env, TokenError::Overflow))?;
    write_total_supply(env, supply);
    Ok(supply)
}

pub fn decrease_supply(env: &Env, amount: u128) -> Result<u128, TokenError> {
    // Every burned unit was debited from some balance first, so the supply
    // covers it while the balance/supply invariant holds.
    let supply = total_supply(env)
        .checked_sub(amount)
        .ok_or_else(|| reject(env, TokenError::InsufficientBalance))?;
    write_total_supply(env, supply);
    Ok(supply)
}
