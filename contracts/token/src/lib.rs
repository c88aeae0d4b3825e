#![no_std]

mod allowance;
mod balance;
mod cap;
mod errors;
mod events;
mod owner;
mod storage;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use crate::cap::check_mint;
pub use crate::errors::TokenError;
pub use crate::storage::TokenMetadata;

use crate::errors::reject;
use crate::storage::DataKey;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// Capped, ownable fungible token.
///
/// Total supply never exceeds the cap fixed at initialization; only the owner
/// can mint. Any holder can burn their own tokens, or a holder's tokens up to
/// the allowance they granted.
#[contract]
pub struct CappedToken;

#[contractimpl]
impl CappedToken {
    // ── Initialization ──────────────────────────────────────────────────

    /// Configure the token and mint `initial_supply` to `owner`.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        cap: u128,
        initial_supply: u128,
    ) -> Result<(), TokenError> {
        if storage::is_initialized(&env) {
            return Err(reject(&env, TokenError::AlreadyInitialized));
        }
        cap::validate_cap(cap, initial_supply).map_err(|err| reject(&env, err))?;

        owner::write_owner(&env, Some(&owner));
        cap::write_cap(&env, cap);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        storage::bump_instance(&env);

        if initial_supply > 0 {
            Self::_mint(&env, &owner, initial_supply)?;
        }

        log!(&env, "token initialized", cap, initial_supply);
        Ok(())
    }

    // ── Owner actions ───────────────────────────────────────────────────

    /// Mint `amount` tokens to the owner. Owner only.
    pub fn mint_to_self(env: Env, caller: Address, amount: u128) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);
        owner::require_owner(&env, &caller)?;
        Self::_mint(&env, &caller, amount)
    }

    /// Mint `amount` tokens to `to`. Owner only.
    pub fn mint_to(env: Env, caller: Address, to: Address, amount: u128) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);
        owner::require_owner(&env, &caller)?;
        Self::_mint(&env, &to, amount)
    }

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);
        owner::require_owner(&env, &caller)?;

        owner::write_owner(&env, Some(&new_owner));
        events::owner_changed(&env, &caller, Some(new_owner));
        Ok(())
    }

    /// Give up the owner role for good. Minting is impossible afterwards.
    pub fn renounce_ownership(env: Env, caller: Address) -> Result<(), TokenError> {
        caller.require_auth();
        storage::bump_instance(&env);
        owner::require_owner(&env, &caller)?;

        owner::write_owner(&env, None);
        events::owner_changed(&env, &caller, None);
        Ok(())
    }

    // ── Token operations ────────────────────────────────────────────────

    /// Transfer `amount` from `from` to `to`. Caller must be `from`.
    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<bool, TokenError> {
        from.require_auth();
        storage::bump_instance(&env);

        Self::_transfer(&env, &from, &to, amount)?;
        Ok(true)
    }

    /// Transfer `amount` from `from` to `to` using `spender`'s allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<bool, TokenError> {
        spender.require_auth();
        storage::bump_instance(&env);

        allowance::ensure_allowance(&env, &from, &spender, amount)?;
        balance::ensure_balance(&env, &from, amount)?;

        let remaining = allowance::consume(&env, &from, &spender, amount)?;
        Self::_transfer(&env, &from, &to, amount)?;
        events::approve(&env, &from, &spender, remaining);
        Ok(true)
    }

    /// Set the allowance of `spender` over `owner`'s tokens to exactly `amount`.
    pub fn approve(env: Env, owner: Address, spender: Address, amount: u128) -> Result<bool, TokenError> {
        owner.require_auth();
        storage::bump_instance(&env);

        allowance::set(&env, &owner, &spender, amount);
        events::approve(&env, &owner, &spender, amount);
        Ok(true)
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<bool, TokenError> {
        owner.require_auth();
        storage::bump_instance(&env);

        let updated = allowance::increase(&env, &owner, &spender, delta)?;
        events::approve(&env, &owner, &spender, updated);
        Ok(true)
    }

    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        delta: u128,
    ) -> Result<bool, TokenError> {
        owner.require_auth();
        storage::bump_instance(&env);

        let updated = allowance::decrease(&env, &owner, &spender, delta)?;
        events::approve(&env, &owner, &spender, updated);
        Ok(true)
    }

    /// Destroy `amount` of `from`'s tokens. Caller must be `from`.
    pub fn burn(env: Env, from: Address, amount: u128) -> Result<(), TokenError> {
        from.require_auth();
        storage::bump_instance(&env);

        Self::_burn(&env, &from, amount)
    }

    /// Destroy `amount` of `from`'s tokens using `spender`'s allowance.
    pub fn burn_from(env: Env, spender: Address, from: Address, amount: u128) -> Result<(), TokenError> {
        spender.require_auth();
        storage::bump_instance(&env);

        allowance::ensure_allowance(&env, &from, &spender, amount)?;
        balance::ensure_balance(&env, &from, amount)?;

        let remaining = allowance::consume(&env, &from, &spender, amount)?;
        Self::_burn(&env, &from, amount)?;
        events::approve(&env, &from, &spender, remaining);
        Ok(())
    }

    // ── Read-only getters ───────────────────────────────────────────────

    pub fn balance_of(env: Env, id: Address) -> u128 {
        balance::balance_of(&env, &id)
    }

    pub fn total_supply(env: Env) -> u128 {
        balance::total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> u128 {
        allowance::allowance(&env, &owner, &spender)
    }

    pub fn cap(env: Env) -> Result<u128, TokenError> {
        cap::read_cap(&env)
    }

    /// Current owner, or `None` once ownership has been renounced.
    pub fn owner(env: Env) -> Option<Address> {
        owner::read_owner(&env)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(Self::_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(Self::_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(Self::_metadata(&env)?.decimals)
    }

    // ── Internal helpers ────────────────────────────────────────────────

    fn _metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or_else(|| reject(env, TokenError::NotInitialized))
    }

    fn _mint(env: &Env, to: &Address, amount: u128) -> Result<(), TokenError> {
        let cap = cap::read_cap(env)?;
        cap::check_mint(balance::total_supply(env), amount, cap).map_err(|err| reject(env, err))?;

        balance::credit(env, to, amount)?;
        balance::increase_supply(env, amount)?;

        events::mint(env, to, amount);
        Ok(())
    }

    fn _burn(env: &Env, from: &Address, amount: u128) -> Result<(), TokenError> {
        balance::debit(env, from, amount)?;
        balance::decrease_supply(env, amount)?;

        events::burn(env, from, amount);
        Ok(())
    }

    fn _transfer(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), TokenError> {
        balance::debit(env, from, amount)?;
        balance::credit(env, to, amount)?;

        events::transfer(env, from, to, amount);
        Ok(())
    }
}
