use crate::invariants;
use crate::storage::{get_config, get_deposit, get_state, set_deposit, set_state};
use pool_types::{require_positive_amount, ClaimTokenClient, PoolError};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Take `amount` of principal into custody and mint the same amount of
/// claim tokens to `depositor`.
///
/// The depositor must have approved the pool as spender on the principal
/// asset beforehand. Any error leaves storage untouched: an `Err` return
/// rolls back this invocation, including nested token calls.
pub fn deposit(env: &Env, depositor: &Address, amount: i128) -> Result<(), PoolError> {
    require_positive_amount(amount)?;

    let config = get_config(env);
    let pool = env.current_contract_address();

    // Pull principal: pool is the spender, funds land in pool custody
    let principal = token::Client::new(env, &config.principal);
    match principal.try_transfer_from(&pool, depositor, &pool, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(PoolError::AssetTransferFailed),
    }

    let before = get_state(env);
    let mut state = before.clone();
    state.total_liquidity = state
        .total_liquidity
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let recorded = get_deposit(env, depositor)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    debug_assert!(invariants::deposit_transition_valid(&before, &state, amount));

    set_deposit(env, depositor, recorded);
    set_state(env, &state);

    let claim_token = ClaimTokenClient::new(env, &config.claim_token);
    claim_token.mint(&pool, depositor, &amount);

    log!(env, "deposit", depositor, amount, state.total_liquidity);
    env.events().publish(
        (Symbol::new(env, "deposited"), depositor.clone()),
        amount,
    );
    Ok(())
}

/// Burn `amount` of `holder`'s claim tokens and pay out the same amount of
/// principal from custody.
///
/// Redemption is against the claim balance, so tokens received by transfer
/// are redeemable too. The holder's deposit record shrinks by at most what
/// it holds.
pub fn withdraw(env: &Env, holder: &Address, amount: i128) -> Result<(), PoolError> {
    require_positive_amount(amount)?;

    let config = get_config(env);
    let pool = env.current_contract_address();

    let claim_token = ClaimTokenClient::new(env, &config.claim_token);
    if claim_token.balance(holder) < amount {
        return Err(PoolError::InsufficientClaimBalance);
    }
    claim_token.burn(&pool, holder, &amount);

    let before = get_state(env);
    let mut state = before.clone();
    state.total_liquidity = state
        .total_liquidity
        .checked_sub(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    debug_assert!(invariants::withdraw_transition_valid(&before, &state, amount));
    debug_assert!(invariants::liquidity_non_negative(&state));

    let recorded = get_deposit(env, holder);
    let remaining = recorded - recorded.min(amount);
    debug_assert!(invariants::deposit_record_after_withdraw(recorded, remaining, amount));

    // Holders redeeming transferred claims have no record to update
    if recorded > 0 {
        set_deposit(env, holder, remaining);
    }
    set_state(env, &state);

    let principal = token::Client::new(env, &config.principal);
    principal.transfer(&pool, holder, &amount);

    log!(env, "withdraw", holder, amount, state.total_liquidity);
    env.events().publish(
        (Symbol::new(env, "withdrawn"), holder.clone()),
        amount,
    );
    Ok(())
}
