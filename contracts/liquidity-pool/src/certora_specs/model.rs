// ============================================================================
// GHOST STATE AND SNAPSHOTS
// ============================================================================

use soroban_sdk::{Address, Env};

/// Ghost state tracking net liquidity moved by the rule under test
static mut GHOST_LIQUIDITY_DELTA: i128 = 0;

pub fn get_liquidity_delta() -> i128 {
    unsafe { GHOST_LIQUIDITY_DELTA }
}

pub fn add_liquidity_delta(delta: i128) {
    unsafe { GHOST_LIQUIDITY_DELTA += delta }
}

/// Reset ghost state to clean values
pub fn reset() {
    unsafe {
        GHOST_LIQUIDITY_DELTA = 0;
    }
}

/// Pool accounting for before/after comparisons
#[derive(Clone)]
pub struct PoolSnapshot {
    pub total_liquidity: i128,
    pub deposit: i128,
}

impl PoolSnapshot {
    pub fn capture(env: &Env, depositor: &Address) -> Self {
        Self {
            total_liquidity: crate::LiquidityPool::liquidity_funds(env.clone()),
            deposit: crate::LiquidityPool::user_deposits(env.clone(), depositor.clone()),
        }
    }
}
