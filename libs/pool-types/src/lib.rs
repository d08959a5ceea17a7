#![no_std]

mod error;
mod interface;
mod pool;
mod token;

pub use error::*;
pub use interface::*;
pub use pool::*;
pub use token::*;

/// Check a pool-facing amount: deposits and withdrawals must move value
pub fn require_positive_amount(amount: i128) -> Result<(), PoolError> {
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    Ok(())
}

/// Check a token-level amount: zero transfers are allowed, negative ones are not
pub fn require_nonnegative_amount(amount: i128) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::InvalidAmount);
    }
    Ok(())
}
