//! Validation for registration input.

use crate::types::TripGeneratorError;

/// Validation error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Budget below zero
    NegativeBudget,
}

impl From<ValidationError> for TripGeneratorError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::NegativeBudget => TripGeneratorError::InvalidBudget,
        }
    }
}

/// Validates a budget amount.
/// Zero is allowed; the upper bound is whatever `i128` holds.
pub fn validate_budget(budget: i128) -> Result<(), ValidationError> {
    if budget < 0 {
        return Err(ValidationError::NegativeBudget);
    }
    Ok(())
}
