//! # Billing Error Types
//!
//! Error types for the invoicing boundary.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (saral-core)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BillingError (this module) ← adds record context                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Route handler maps to a panel-visible failure                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Invoicing boundary errors.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Merchant configuration record cannot produce a usable tax profile.
    ///
    /// ## When This Occurs
    /// - Stored GSTIN fails structural validation
    /// - GSTIN prefix is not a notified state code
    #[error("merchant profile is invalid: {reason}")]
    InvalidMerchantProfile { reason: String },

    /// Customer record carries a malformed GSTIN.
    #[error("customer GSTIN {gstin:?} is invalid")]
    InvalidCustomerGstin { gstin: String },

    /// Customer record carries an unknown state code.
    #[error("customer state code {code:?} is not a notified GST state code")]
    InvalidCustomerState { code: String },

    /// Core calculation rejected the charge.
    #[error(transparent)]
    Core(#[from] saral_core::CoreError),
}

/// Convenience type alias for Results with BillingError.
pub type BillingResult<T> = Result<T, BillingError>;
