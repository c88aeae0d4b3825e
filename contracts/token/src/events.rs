use soroban_sdk::{symbol_short, Address, Env};

pub(crate) fn transfer(env: &Env, from: &Address, to: &Address, amount: u128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// `allowance` is the value after the update, not the delta.
pub(crate) fn approve(env: &Env, owner: &Address, spender: &Address, allowance: u128) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        allowance,
    );
}

pub(crate) fn mint(env: &Env, to: &Address, amount: u128) {
    env.events().publish((symbol_short!("mint"), to.clone()), amount);
}

pub(crate) fn burn(env: &Env, from: &Address, amount: u128) {
    env.events().publish((symbol_short!("burn"), from.clone()), amount);
}

pub(crate) fn owner_changed(env: &Env, previous: &Address, new_owner: Option<Address>) {
    env.events()
        .publish((symbol_short!("owner"), previous.clone()), new_owner);
}
