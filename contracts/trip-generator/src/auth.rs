//! Administrator check applied before every mutating call.

use soroban_sdk::Address;

use crate::types::TripGeneratorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    NotAdministrator,
}

impl From<AuthorizationError> for TripGeneratorError {
    fn from(e: AuthorizationError) -> Self {
        match e {
            AuthorizationError::NotAdministrator => TripGeneratorError::Unauthorized,
        }
    }
}

/// Succeeds only when `caller` is the administrator.
///
/// This is a plain comparison. Proving that `caller` actually signed the
/// invocation is the job of `Address::require_auth` at the entry point.
pub fn authorize(caller: &Address, admin: &Address) -> Result<(), AuthorizationError> {
    if caller != admin {
        return Err(AuthorizationError::NotAdministrator);
    }
    Ok(())
}
