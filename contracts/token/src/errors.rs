use core::fmt;

use soroban_sdk::{contracterror, log, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InsufficientBalance = 3,
    InsufficientAllowance = 4,
    AllowanceUnderflow = 5,
    CapExceeded = 6,
    InvalidCap = 7,
    Unauthorized = 8,
    Overflow = 9,
}

impl TokenError {
    /// Stable, human-readable reason for the rejection. Callers match on
    /// these strings, so the wording must not change.
    pub const fn reason(&self) -> &'static str {
        match self {
            TokenError::AlreadyInitialized => "already initialized",
            TokenError::NotInitialized => "not initialized",
            TokenError::InsufficientBalance => "ERC20: transfer amount exceeds balance",
            TokenError::InsufficientAllowance => "ERC20: transfer amount exceeds allowance",
            TokenError::AllowanceUnderflow => "ERC20: decreased allowance below zero",
            TokenError::CapExceeded => "ERC20Capped: cap exceeded",
            TokenError::InvalidCap => "ERC20Capped: cap is 0",
            TokenError::Unauthorized => "Ownable: caller is not the owner",
            TokenError::Overflow => "ERC20: amount overflow",
        }
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Record a rejection in the diagnostic log and hand the error back for `?`.
pub(crate) fn reject(env: &Env, err: TokenError) -> TokenError {
    log!(env, "token call rejected", err as u32);
    err
}
