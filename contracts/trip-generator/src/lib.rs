//! # Trip Generator Contract
//!
//! A Soroban smart contract holding the user registry of the decentralized
//! trip generator.
//!
//! ## Features
//!
//! - **Owner-gated Writes**: Only the administrator bound at deployment can register users
//! - **Validation**: Rejects negative budgets before anything is written
//! - **Public Reads**: Any caller can look up a user by id
//! - **Event Emission**: Tracks first registrations and overwrites
//!
//! Registering an id that already exists replaces the stored record.
#![no_std]

mod auth;
mod storage;
mod types;
mod validation;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub use crate::types::{LedgerEvents, TripGeneratorError, UserRecord};
use crate::auth::authorize;
use crate::validation::validate_budget;

#[contract]
pub struct TripGeneratorContract;

#[contractimpl]
impl TripGeneratorContract {
    /// Binds the administrator. Runs once, as part of deployment.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
    }

    /// Registers a user, or replaces the record of an existing id.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `caller` - The address calling this function (must be admin)
    /// * `id` - User id, unique key of the record
    /// * `email` - Contact email, stored as given
    /// * `budget` - Budget (wallet balance), must not be negative
    ///
    /// # Events Emitted
    /// * `(user, created)` - The id was not registered before
    /// * `(user, updated)` - An existing record was replaced
    ///
    /// # Errors
    /// * `Unauthorized` - If caller is not admin
    /// * `InvalidBudget` - If budget is negative
    pub fn register_user(
        env: Env,
        caller: Address,
        id: u64,
        email: String,
        budget: i128,
    ) -> Result<(), TripGeneratorError> {
        caller.require_auth();
        let admin = storage::read_admin(&env)?;
        if let Err(e) = authorize(&caller, &admin) {
            log!(&env, "register_user: caller is not admin", caller);
            return Err(e.into());
        }

        if let Err(e) = validate_budget(budget) {
            log!(&env, "register_user: negative budget", id, budget);
            return Err(e.into());
        }

        let record = UserRecord {
            id,
            email,
            budget,
            registered_at: env.ledger().timestamp(),
        };

        if storage::write_user(&env, &record) {
            LedgerEvents::user_created(&env, &record);
        } else {
            LedgerEvents::user_updated(&env, &record);
        }

        Ok(())
    }

    /// Retrieves the record for `id`, if registered.
    pub fn get_user(env: Env, id: u64) -> Option<UserRecord> {
        storage::read_user(&env, id)
    }

    /// Same as `get_user`, under the accessor name deploy tooling expects.
    pub fn users(env: Env, id: u64) -> Option<UserRecord> {
        Self::get_user(env, id)
    }

    pub fn has_user(env: Env, id: u64) -> bool {
        storage::has_user(&env, id)
    }

    /// Returns the number of distinct ids registered.
    pub fn user_count(env: Env) -> u64 {
        storage::user_count(&env)
    }

    /// Returns the admin address
    pub fn get_admin(env: Env) -> Result<Address, TripGeneratorError> {
        storage::read_admin(&env)
    }
}
