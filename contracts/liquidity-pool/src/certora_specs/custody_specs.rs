// ============================================================================
// CUSTODY ENTRY-POINT SPECIFICATIONS
// ============================================================================
//
// Rules over `deposit` and `withdraw` as called by users.
//
// ============================================================================

use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

use super::model::{self, PoolSnapshot};
use crate::LiquidityPool;

/// RULE: Non-positive deposits are rejected without touching state
#[rule]
pub fn deposit_non_positive_rejected(env: Env, depositor: Address, amount: i128) {
    cvlr_assume!(amount <= 0);

    let before = PoolSnapshot::capture(&env, &depositor);
    let result = LiquidityPool::deposit(env.clone(), depositor.clone(), amount);
    let after = PoolSnapshot::capture(&env, &depositor);

    cvlr_assert!(result.is_err());
    cvlr_assert!(after.total_liquidity == before.total_liquidity);
    cvlr_assert!(after.deposit == before.deposit);
}

/// RULE: Non-positive withdrawals are rejected without touching state
#[rule]
pub fn withdraw_non_positive_rejected(env: Env, holder: Address, amount: i128) {
    cvlr_assume!(amount <= 0);

    let before = PoolSnapshot::capture(&env, &holder);
    let result = LiquidityPool::withdraw(env.clone(), holder.clone(), amount);
    let after = PoolSnapshot::capture(&env, &holder);

    cvlr_assert!(result.is_err());
    cvlr_assert!(after.total_liquidity == before.total_liquidity);
    cvlr_assert!(after.deposit == before.deposit);
}

/// RULE: A successful deposit grows liquidity and the depositor's record by
/// exactly the amount
#[rule]
pub fn deposit_moves_liquidity_by_amount(env: Env, depositor: Address, amount: i128) {
    model::reset();
    cvlr_assume!(amount > 0);

    let before = PoolSnapshot::capture(&env, &depositor);
    if LiquidityPool::deposit(env.clone(), depositor.clone(), amount).is_ok() {
        model::add_liquidity_delta(amount);
        let after = PoolSnapshot::capture(&env, &depositor);

        cvlr_assert!(after.total_liquidity - before.total_liquidity == model::get_liquidity_delta());
        cvlr_assert!(after.deposit == before.deposit + amount);
    }
}

/// RULE: A successful withdraw shrinks liquidity by exactly the amount and
/// never leaves a negative record
#[rule]
pub fn withdraw_moves_liquidity_by_amount(env: Env, holder: Address, amount: i128) {
    model::reset();
    cvlr_assume!(amount > 0);

    let before = PoolSnapshot::capture(&env, &holder);
    if LiquidityPool::withdraw(env.clone(), holder.clone(), amount).is_ok() {
        model::add_liquidity_delta(-amount);
        let after = PoolSnapshot::capture(&env, &holder);

        cvlr_assert!(after.total_liquidity - before.total_liquidity == model::get_liquidity_delta());
        cvlr_assert!(after.deposit >= 0);
        cvlr_assert!(after.deposit <= before.deposit);
    }
}

/// RULE: Depositing and then redeeming the same amount restores liquidity
/// and the depositor's record
#[rule]
pub fn round_trip_restores_ledger(env: Env, user: Address, amount: i128) {
    cvlr_assume!(amount > 0);

    let before = PoolSnapshot::capture(&env, &user);
    if LiquidityPool::deposit(env.clone(), user.clone(), amount).is_ok()
        && LiquidityPool::withdraw(env.clone(), user.clone(), amount).is_ok()
    {
        let after = PoolSnapshot::capture(&env, &user);

        cvlr_assert!(after.total_liquidity == before.total_liquidity);
        cvlr_assert!(after.deposit == before.deposit);
    }
}
