use pool_types::{AllowanceKey, AllowanceValue, PoolError, TokenMetadata};
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the claim token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner allowed to mint and burn (Instance storage)
    Owner,
    /// Name, symbol, decimals (Instance storage)
    Metadata,
    /// Outstanding supply (Instance storage)
    TotalSupply,
    /// Holder -> balance (Persistent storage)
    Balance(Address),
    /// (from, spender) -> allowance (Temporary storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Token not constructed")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> TokenMetadata {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .expect("Token not constructed")
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

pub fn receive_balance(env: &Env, id: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = get_balance(env, id)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    set_balance(env, id, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = get_balance(env, id);
    if balance < amount {
        return Err(PoolError::InsufficientClaimBalance);
    }
    set_balance(env, id, balance - amount);
    Ok(())
}

// === Allowances ===

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), PoolError> {
    let current = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current {
        return Err(PoolError::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    // Entry lives exactly as long as the approval window
    if amount > 0 {
        let live_for = expiration_ledger - current;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
