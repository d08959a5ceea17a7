// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Pure predicates over pool accounting. The contract evaluates the peg and
// custody checks on-chain through `is_pegged`; the Certora rules and the
// unit tests use the rest.
//
// INVARIANT CATEGORIES:
//
// 1. PEG INVARIANTS
//    - Claim-token supply equals pool liquidity
//    - Custody balance covers pool liquidity
//
// 2. LEDGER INVARIANTS
//    - Recorded deposits cover pool liquidity
//    - Amounts are never negative
//
// 3. TRANSITION INVARIANTS
//    - Deposit and withdraw move liquidity by exactly the amount
//
// ============================================================================

use pool_types::PoolState;

// ============================================================================
// PEG INVARIANTS
// ============================================================================

/// Invariant: one claim token per unit of custodied principal
///
/// Property:
///   total_liquidity == claim_token.total_supply()
pub fn liquidity_pegged(state: &PoolState, claim_supply: i128) -> bool {
    state.total_liquidity == claim_supply
}

/// Invariant: the pool holds at least what it owes
///
/// Property:
///   principal.balance(pool) >= total_liquidity
///
/// Equality holds unless principal was sent to the pool outside `deposit`.
pub fn custody_covers_liquidity(state: &PoolState, custody_balance: i128) -> bool {
    custody_balance >= state.total_liquidity
}

// ============================================================================
// LEDGER INVARIANTS
// ============================================================================

/// Invariant: recorded contributions cover outstanding liquidity
///
/// Property:
///   sum(deposits) >= total_liquidity
///
/// Equal while every redemption is made by the identity holding the record.
/// A holder redeeming claim tokens it received by transfer lowers liquidity
/// by more than its own record.
pub fn deposits_cover_liquidity(state: &PoolState, deposits_sum: i128) -> bool {
    deposits_sum >= state.total_liquidity
}

/// Invariant: liquidity is non-negative
pub fn liquidity_non_negative(state: &PoolState) -> bool {
    state.total_liquidity >= 0
}

// ============================================================================
// TRANSITION INVARIANTS
// ============================================================================

/// Deposit adds exactly `amount` to liquidity
pub fn deposit_transition_valid(before: &PoolState, after: &PoolState, amount: i128) -> bool {
    amount > 0 && after.total_liquidity == before.total_liquidity + amount
}

/// Withdraw removes exactly `amount` from liquidity
pub fn withdraw_transition_valid(before: &PoolState, after: &PoolState, amount: i128) -> bool {
    amount > 0 && after.total_liquidity == before.total_liquidity - amount
}

/// Withdraw shrinks the holder's record by at most `amount`, never below zero
pub fn deposit_record_after_withdraw(recorded_before: i128, recorded_after: i128, amount: i128) -> bool {
    recorded_after >= 0
        && recorded_after <= recorded_before
        && recorded_before - recorded_after == recorded_before.min(amount)
}

// ============================================================================
// TESTS
// ============================================================================
