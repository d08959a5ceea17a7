// ============================================================================
// PEG AND LEDGER INVARIANT SPECIFICATIONS
// ============================================================================
//
// Rules over the pure predicates in `invariants`, for arbitrary states.
// Round trips over the entry points live in `custody_specs`.
//
// ============================================================================

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;

use crate::invariants::{custody_covers_liquidity, deposit_record_after_withdraw};
use pool_types::PoolState;

/// RULE: Custody equal to liquidity always covers it
#[rule]
pub fn exact_custody_covers(liquidity: i128) {
    cvlr_assume!(liquidity >= 0);
    let state = PoolState {
        total_liquidity: liquidity,
    };
    cvlr_assert!(custody_covers_liquidity(&state, liquidity));
}

/// RULE: The saturating record update is the only valid one
#[rule]
pub fn record_update_saturates(recorded: i128, amount: i128) {
    cvlr_assume!(recorded >= 0 && amount > 0);
    let remaining = recorded - recorded.min(amount);
    cvlr_assert!(deposit_record_after_withdraw(recorded, remaining, amount));
    cvlr_satisfy!(remaining == 0);
}
