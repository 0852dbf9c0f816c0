//! Data types, storage keys and events for the user registry.

use soroban_sdk::{contracterror, contracttype, symbol_short, Env, String};

/// Persistent entries are bumped once their TTL drops below this (~30 days).
pub const USER_TTL_THRESHOLD: u32 = 518_400;

/// TTL a user entry is extended to on write or read (~150 days).
pub const USER_TTL_EXTEND: u32 = 2_592_000;

pub const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
pub const INSTANCE_TTL_EXTEND: u32 = 2_592_000;

/// Stored registry entry for a user.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    /// Caller-supplied primary key
    pub id: u64,
    /// Contact email, stored verbatim
    pub email: String,
    /// Budget (wallet balance) in the smallest unit, never negative
    pub budget: i128,
    /// Ledger timestamp of the last registration for this id
    pub registered_at: u64,
}

/// Storage keys for the contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator bound at construction
    Admin,
    /// Number of distinct ids ever registered
    UserCount,
    User(u64),
}

/// Error codes surfaced to contract callers.
///
/// The numeric values are part of the public interface; clients match on
/// them rather than on any message text.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TripGeneratorError {
    /// No administrator stored
    NotInitialized = 1,
    /// Caller is not the administrator (`OwnableUnauthorizedAccount`)
    Unauthorized = 2,
    /// Budget is negative
    InvalidBudget = 3,
}

/// Events emitted by the registry.
pub struct LedgerEvents;

impl LedgerEvents {
    /// First registration of an id.
    pub fn user_created(env: &Env, record: &UserRecord) {
        let topics = (symbol_short!("user"), symbol_short!("created"));
        env.events().publish(
            topics,
            (record.id, record.email.clone(), record.budget),
        );
    }

    /// An existing id was overwritten.
    pub fn user_updated(env: &Env, record: &UserRecord) {
        let topics = (symbol_short!("user"), symbol_short!("updated"));
        env.events().publish(
            topics,
            (record.id, record.email.clone(), record.budget),
        );
    }
}
