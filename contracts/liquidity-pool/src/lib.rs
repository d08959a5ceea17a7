#![no_std]

#[cfg(feature = "certora")]
pub mod certora_specs;
mod custody;
pub mod invariants;
mod storage;

use pool_types::{ClaimTokenClient, PoolConfig, PoolError, PoolState};
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env, String};
use storage::{get_config, get_deposit, get_state, set_config, set_state};

/// Custodial liquidity pool.
///
/// Holds a principal asset on behalf of depositors and issues claim tokens
/// 1:1 against it. The pool deploys its claim token at construction and is
/// its sole owner, so claim supply only moves through `deposit` and
/// `withdraw`.
#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    /// Bind the pool to its principal asset and deploy its claim token
    ///
    /// # Arguments
    /// * `principal` - Asset held in custody
    /// * `claim_wasm_hash` - Uploaded `lp-token` wasm
    /// * `name`, `symbol` - Claim token metadata; decimals follow the principal
    pub fn __constructor(
        env: Env,
        principal: Address,
        claim_wasm_hash: BytesN<32>,
        name: String,
        symbol: String,
    ) {
        let pool = env.current_contract_address();
        let decimals = token::Client::new(&env, &principal).decimals();

        // One claim token per pool, so a fixed salt under the pool's address
        let salt = BytesN::from_array(&env, &[0u8; 32]);
        let claim_token = env
            .deployer()
            .with_current_contract(salt)
            .deploy_v2(claim_wasm_hash, (pool, name, symbol, decimals));

        set_config(
            &env,
            &PoolConfig {
                principal: principal.clone(),
                claim_token: claim_token.clone(),
            },
        );
        set_state(&env, &PoolState::new());

        log!(&env, "pool constructed", principal, claim_token);
    }

    /// Deposit principal and receive the same amount of claim tokens
    ///
    /// # Arguments
    /// * `depositor` - Must authorize, and must have approved the pool as
    ///   spender of at least `amount` on the principal asset
    /// * `amount` - Principal units, strictly positive
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<(), PoolError> {
        depositor.require_auth();
        custody::deposit(&env, &depositor, amount)
    }

    /// Redeem claim tokens for the same amount of principal
    ///
    /// # Arguments
    /// * `holder` - Must authorize and hold at least `amount` claim tokens
    /// * `amount` - Claim-token units, strictly positive
    pub fn withdraw(env: Env, holder: Address, amount: i128) -> Result<(), PoolError> {
        holder.require_auth();
        custody::withdraw(&env, &holder, amount)
    }

    // === View Functions ===

    /// Total principal owed to claim holders
    pub fn liquidity_funds(env: Env) -> i128 {
        get_state(&env).total_liquidity
    }

    /// Outstanding principal recorded for `depositor`
    pub fn user_deposits(env: Env, depositor: Address) -> i128 {
        get_deposit(&env, &depositor)
    }

    pub fn get_config(env: Env) -> PoolConfig {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> PoolState {
        get_state(&env)
    }

    pub fn principal(env: Env) -> Address {
        get_config(&env).principal
    }

    /// Address of the claim token deployed at construction
    pub fn claim_token(env: Env) -> Address {
        get_config(&env).claim_token
    }

    /// Principal actually held by the pool
    pub fn custody_balance(env: Env) -> i128 {
        let config = get_config(&env);
        let principal = token::Client::new(&env, &config.principal);
        principal.balance(&env.current_contract_address())
    }

    /// Claim tokens in circulation
    pub fn claim_supply(env: Env) -> i128 {
        let config = get_config(&env);
        ClaimTokenClient::new(&env, &config.claim_token).total_supply()
    }

    /// Whether claim supply matches liquidity and custody covers it
    pub fn is_pegged(env: Env) -> bool {
        let state = get_state(&env);
        invariants::liquidity_pegged(&state, Self::claim_supply(env.clone()))
            && invariants::custody_covers_liquidity(&state, Self::custody_balance(env))
    }
}
