use crate::PoolError;
use soroban_sdk::{contractclient, Address, Env, String};

/// Cross-contract interface of the claim token.
///
/// The pool talks to its claim token through the generated
/// `ClaimTokenClient` so it never links the token contract itself.
#[contractclient(name = "ClaimTokenClient")]
pub trait ClaimTokenInterface {
    fn owner(env: Env) -> Address;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn total_supply(env: Env) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn allowance(env: Env, from: Address, spender: Address) -> i128;
    fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PoolError>;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError>;
    fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), PoolError>;
    fn burn(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), PoolError>;
}
