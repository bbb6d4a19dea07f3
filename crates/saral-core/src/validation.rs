//! # Validation Module
//!
//! Field validation for staff input arriving at the panel's route
//! handlers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Panel frontend (TypeScript)                                  │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Route handler (calls THIS MODULE)                            │
//! │  ├── Typed field validation before any business logic                  │
//! │  └── ValidationError → 422 with the field name                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted database constraints (external collaborator)          │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::gstin::is_valid_gstin;
use crate::types::StateCode;

/// Largest page size the list endpoints will serve.
pub const MAX_PER_PAGE: i64 = 100;

// =============================================================================
// Monetary / Rate Validators
// =============================================================================

/// Validates a charge amount in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (fully discounted charges)
pub fn validate_amount_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
/// - GST slabs in practice are 0-2800, but legacy composition rates exist
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10_000,
        });
    }
    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a two-digit GST state code.
pub fn validate_state_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "state_code".to_string(),
        });
    }
    if !StateCode::is_known(code) {
        return Err(ValidationError::InvalidFormat {
            field: "state_code".to_string(),
            reason: "must be a notified GST state code".to_string(),
        });
    }
    Ok(())
}

/// Validates a GSTIN form field, with a typed error instead of the
/// boolean sentinel from [`crate::gstin::is_valid_gstin`].
pub fn validate_gstin_field(gstin: &str) -> ValidationResult<()> {
    if gstin.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "gstin".to_string(),
        });
    }
    if !is_valid_gstin(gstin) {
        return Err(ValidationError::InvalidFormat {
            field: "gstin".to_string(),
            reason: "must be 15 upper-case characters in GSTIN format".to_string(),
        });
    }
    Ok(())
}

/// Validates a record ID (users, subscriptions, projects, prompts all
/// key on UUIDs).
///
/// ## Example
/// ```rust
/// use saral_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }
    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;
    Ok(())
}

// =============================================================================
// Pagination Validators
// =============================================================================

/// Validates a 1-based page number from a list endpoint query.
pub fn validate_page(page: i64) -> ValidationResult<()> {
    if page < 1 {
        return Err(ValidationError::MustBePositive {
            field: "page".to_string(),
        });
    }
    Ok(())
}

/// Validates a page size from a list endpoint query.
pub fn validate_per_page(per_page: i64) -> ValidationResult<()> {
    if per_page < 1 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::OutOfRange {
            field: "per_page".to_string(),
            min: 1,
            max: MAX_PER_PAGE,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount_paise() {
        assert!(validate_amount_paise(0).is_ok());
        assert!(validate_amount_paise(118_000).is_ok());
        assert!(validate_amount_paise(-1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1800).is_ok());
        assert!(validate_tax_rate_bps(10_000).is_ok());
        assert!(validate_tax_rate_bps(10_001).is_err());
    }

    #[test]
    fn test_validate_state_code() {
        assert!(validate_state_code("27").is_ok());
        assert!(validate_state_code("97").is_ok());
        assert!(validate_state_code("").is_err());
        assert!(validate_state_code("00").is_err());
        assert!(validate_state_code("MH").is_err());
    }

    #[test]
    fn test_validate_gstin_field() {
        assert!(validate_gstin_field("29ABCDE1234F1Z5").is_ok());
        assert!(matches!(
            validate_gstin_field(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_gstin_field("29abcde1234f1z5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_pagination() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(0).is_err());
        assert!(validate_per_page(25).is_ok());
        assert!(validate_per_page(100).is_ok());
        assert!(validate_per_page(0).is_err());
        assert!(validate_per_page(101).is_err());
    }
}
