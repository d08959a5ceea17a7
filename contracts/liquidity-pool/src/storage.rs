use pool_types::{PoolConfig, PoolState};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config and State are small and read on every call: Instance storage
// - One Deposit entry per depositor: Persistent storage, so the ledger of
//   contributions does not share a TTL (or a size budget) with the instance
// - Deposit entries are created on first deposit and never removed; a zero
//   record is a valid steady state
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Pool accounting state (Instance storage)
    State,
    /// Depositor -> recorded principal contribution (Persistent storage)
    Deposit(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn get_config(env: &Env) -> PoolConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Pool not constructed")
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

/// Pool state; reads as empty until the first deposit is written
pub fn get_state(env: &Env) -> PoolState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Deposits ===

pub fn get_deposit(env: &Env, depositor: &Address) -> i128 {
    let key = DataKey::Deposit(depositor.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_deposit(env: &Env, depositor: &Address, amount: i128) {
    let key = DataKey::Deposit(depositor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}
