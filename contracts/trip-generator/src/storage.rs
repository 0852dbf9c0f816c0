use soroban_sdk::{Address, Env};

use crate::types::{
    DataKey, TripGeneratorError, UserRecord, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    USER_TTL_EXTEND, USER_TTL_THRESHOLD,
};

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::UserCount, &0u64);
    bump_instance(env);
}

pub fn read_admin(env: &Env) -> Result<Address, TripGeneratorError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TripGeneratorError::NotInitialized)
}

pub fn read_user(env: &Env, id: u64) -> Option<UserRecord> {
    env.storage().persistent().get(&DataKey::User(id))
}

pub fn has_user(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::User(id))
}

pub fn user_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::UserCount)
        .unwrap_or(0)
}

/// Writes `record` under its id, replacing any previous entry.
///
/// Returns `true` when the id had no entry before.
pub fn write_user(env: &Env, record: &UserRecord) -> bool {
    let key = DataKey::User(record.id);
    let is_new = !env.storage().persistent().has(&key);

    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_TTL_THRESHOLD, USER_TTL_EXTEND);

    if is_new {
        let count = user_count(env).saturating_add(1);
        env.storage().instance().set(&DataKey::UserCount, &count);
    }
    bump_instance(env);

    is_new
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
