//! # Error Types
//!
//! Domain-specific error types for saral-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  saral-core errors (this file)                                         │
//! │  ├── CoreError        - GST/domain errors                              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  saral-billing errors (separate crate)                                 │
//! │  └── BillingError     - Boundary assembly failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → BillingError → route handler      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. The GSTIN helpers never
/// produce them (they return sentinels, see [`crate::gstin`]); the GST
/// calculator rejects out-of-domain input with them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Monetary amount is negative where only charges are meaningful.
    ///
    /// ## When This Occurs
    /// - A charge amount arrives negative from the panel form
    /// - An upstream record was corrupted or mis-keyed
    ///
    /// Refunds are modelled upstream as separate credit notes, never as
    /// negative charges fed into the GST calculator.
    #[error("amount must not be negative, got {paise} paise")]
    NegativeAmount { paise: i64 },

    /// Tax rate is outside 0%..=100%.
    ///
    /// ## When This Occurs
    /// - Merchant configuration holds a rate above 10000 bps
    /// - A caller passes percentage where basis points were expected
    #[error("tax rate {bps} bps is out of range (0..=10000)")]
    TaxRateOutOfRange { bps: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when staff input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed GSTIN, invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeAmount { paise: -500 };
        assert_eq!(err.to_string(), "amount must not be negative, got -500 paise");

        let err = CoreError::TaxRateOutOfRange { bps: 12000 };
        assert_eq!(err.to_string(), "tax rate 12000 bps is out of range (0..=10000)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "gstin".to_string(),
        };
        assert_eq!(err.to_string(), "gstin is required");

        let err = ValidationError::OutOfRange {
            field: "per_page".to_string(),
            min: 1,
            max: 100,
        };
        assert_eq!(err.to_string(), "per_page must be between 1 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "state_code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
