//! Single-owner access control for minting and ownership management.

use soroban_sdk::{Address, Env};

use crate::errors::{reject, TokenError};
use crate::storage::DataKey;

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub(crate) fn write_owner(env: &Env, owner: Option<&Address>) {
    match owner {
        Some(owner) => env.storage().instance().set(&DataKey::Owner, owner),
        None => env.storage().instance().remove(&DataKey::Owner),
    }
}

/// Guard for owner-only entry points. A renounced token has no owner, so
/// every caller is rejected.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    match read_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(reject(env, TokenError::Unauthorized)),
    }
}
