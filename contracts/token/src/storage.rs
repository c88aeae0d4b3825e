use soroban_sdk::{contracttype, Address, Env, String};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const LEDGER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const LEDGER_LIFETIME_THRESHOLD: u32 = LEDGER_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ---------------------------------------------------------------------------
// Storage keys
// ---------------------------------------------------------------------------

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Metadata,
    TotalSupply,
    Cap,
    Balance(Address),
    Allowance(Address, Address), // (owner, spender)
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Cap)
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Read a persistent ledger entry, extending its TTL if it exists.
pub(crate) fn read_ledger_entry(env: &Env, key: &DataKey) -> Option<u128> {
    let value = env.storage().persistent().get::<DataKey, u128>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
    }
    value
}

pub(crate) fn write_ledger_entry(env: &Env, key: &DataKey, value: u128) {
    env.storage().persistent().set(key, &value);
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_LIFETIME_THRESHOLD, LEDGER_BUMP_AMOUNT);
}
