use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Principal asset (SEP-41 token) held in custody
    pub principal: Address,
    /// Claim token contract, owned by the pool
    pub claim_token: Address,
}

/// Pool accounting state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Principal currently owed to claim holders
    pub total_liquidity: i128,
}

impl PoolState {
    pub fn new() -> Self {
        Self { total_liquidity: 0 }
    }
}
