#![no_std]

mod storage;

use pool_types::{require_nonnegative_amount, PoolError, TokenMetadata};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};
use storage::{
    get_allowance, get_balance, get_metadata, get_owner, get_total_supply, receive_balance,
    set_allowance, set_metadata, set_owner, set_total_supply, spend_allowance, spend_balance,
};

/// Claim token issued by a liquidity pool.
///
/// A regular fungible token, except that supply only changes through
/// `mint`/`burn`, and only the owner fixed at construction may call them.
#[contract]
pub struct LpToken;

#[contractimpl]
impl LpToken {
    /// Create the token with its owner (the pool) and metadata
    pub fn __constructor(env: Env, owner: Address, name: String, symbol: String, decimals: u32) {
        set_owner(&env, &owner);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        set_total_supply(&env, 0);
    }

    // === Privileged ===

    /// Issue `amount` new tokens to `to`. Owner only.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        require_owner(&env, &caller)?;
        require_nonnegative_amount(amount)?;

        let supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        receive_balance(&env, &to, amount)?;
        set_total_supply(&env, supply);

        log!(&env, "claim minted", to, amount);
        env.events()
            .publish((Symbol::new(&env, "mint"), to), amount);
        Ok(())
    }

    /// Destroy `amount` tokens held by `from`. Owner only.
    pub fn burn(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), PoolError> {
        require_owner(&env, &caller)?;
        require_nonnegative_amount(amount)?;

        spend_balance(&env, &from, amount)?;
        // Supply is the sum of balances, so it covers any balance just spent
        set_total_supply(&env, get_total_supply(&env) - amount);

        log!(&env, "claim burned", from, amount);
        env.events()
            .publish((Symbol::new(&env, "burn"), from), amount);
        Ok(())
    }

    // === Transfers ===

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        from.require_auth();
        require_nonnegative_amount(amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        spender.require_auth();
        require_nonnegative_amount(amount)?;

        spend_allowance(&env, &from, &spender, amount)?;
        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount)?;

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    /// Allow `spender` to move up to `amount` of `from`'s tokens until
    /// `expiration_ledger` (inclusive)
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PoolError> {
        from.require_auth();
        require_nonnegative_amount(amount)?;

        set_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        env.events().publish(
            (Symbol::new(&env, "approve"), from, spender),
            (amount, expiration_ledger),
        );
        Ok(())
    }

    // === View Functions ===

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    pub fn name(env: Env) -> String {
        get_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        get_metadata(&env).decimals
    }
}

/// Authenticate `caller` and check it is the owner
fn require_owner(env: &Env, caller: &Address) -> Result<(), PoolError> {
    caller.require_auth();
    if *caller != get_owner(env) {
        return Err(PoolError::Unauthorized);
    }
    Ok(())
}
