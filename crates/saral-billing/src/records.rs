//! # Boundary Records
//!
//! Typed records assembled at the edge where the hosted database's
//! loosely-shaped rows meet the pure calculator.
//!
//! ## Why Typed Records Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Hosted DB row (untyped map)        This module (typed record)          │
//! │  ──────────────────────────         ──────────────────────────          │
//! │  { "gstin": "29ABC…",        ──►    MerchantTaxProfile {                │
//! │    "legal_name": "…", … }             gstin: String (validated),        │
//! │                                       state_code: StateCode (derived),  │
//! │                                       … }                               │
//! │                                                                         │
//! │  Constructors validate ONCE at assembly; everything downstream          │
//! │  (gst::compute, line-item shaping) trusts the types.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use saral_core::gstin::{is_valid_gstin, state_code_from_gstin};
use saral_core::money::Money;
use saral_core::types::{StateCode, TaxRate};

use crate::error::{BillingError, BillingResult};

// =============================================================================
// Merchant Tax Profile
// =============================================================================

/// The seller side of every GST computation, assembled from the
/// persisted merchant configuration record.
///
/// ## Design Notes
/// - `state_code` is DERIVED from the GSTIN, never stored separately,
///   so the two can't drift apart
/// - Construction is the only validation point; a profile in hand is
///   always usable
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MerchantTaxProfile {
    /// Registered GSTIN, validated at construction.
    pub gstin: String,

    /// Registration state, derived from the GSTIN prefix.
    pub state_code: StateCode,

    /// Legal name as registered (printed on invoices).
    pub legal_name: String,

    /// When the underlying configuration record last changed.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl MerchantTaxProfile {
    /// Builds a profile from the raw configuration record fields.
    ///
    /// ## Errors
    /// [`BillingError::InvalidMerchantProfile`] when the stored GSTIN is
    /// structurally invalid or carries an unknown state prefix. A bad
    /// merchant config must fail loudly: every invoice depends on it.
    pub fn from_record(
        gstin: &str,
        legal_name: &str,
        updated_at: DateTime<Utc>,
    ) -> BillingResult<Self> {
        let state_code = state_code_from_gstin(gstin).ok_or_else(|| {
            BillingError::InvalidMerchantProfile {
                reason: format!("stored GSTIN {gstin:?} failed validation"),
            }
        })?;

        Ok(Self {
            gstin: gstin.to_string(),
            state_code,
            legal_name: legal_name.to_string(),
            updated_at,
        })
    }
}

// =============================================================================
// Customer Billing Record
// =============================================================================

/// The buyer side of a GST computation.
///
/// Customers may be unregistered (B2C), so the GSTIN is optional; the
/// state code is mandatory because it decides the regime.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBilling {
    /// Display name for the invoice.
    pub name: String,

    /// Customer's state (place of supply).
    pub state_code: StateCode,

    /// Customer GSTIN for B2B invoices; None for B2C.
    pub gstin: Option<String>,
}

impl CustomerBilling {
    /// Builds a customer billing record from raw row fields.
    ///
    /// ## Errors
    /// - [`BillingError::InvalidCustomerState`] for unknown state codes
    /// - [`BillingError::InvalidCustomerGstin`] when a GSTIN is present
    ///   but malformed (an absent GSTIN is fine)
    pub fn from_record(
        name: &str,
        state_code: &str,
        gstin: Option<&str>,
    ) -> BillingResult<Self> {
        let state_code = StateCode::parse(state_code).ok_or_else(|| {
            BillingError::InvalidCustomerState {
                code: state_code.to_string(),
            }
        })?;

        let gstin = match gstin {
            Some(g) if !is_valid_gstin(g) => {
                return Err(BillingError::InvalidCustomerGstin {
                    gstin: g.to_string(),
                })
            }
            Some(g) => Some(g.to_string()),
            None => None,
        };

        Ok(Self {
            name: name.to_string(),
            state_code,
            gstin,
        })
    }
}

// =============================================================================
// Charge Request
// =============================================================================

/// One charge the panel wants to invoice.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    /// Line description shown on the invoice.
    pub description: String,

    /// Charge amount in paise.
    pub amount: Money,

    /// Rate from the merchant configuration for this product class.
    pub rate: TaxRate,

    /// True when `amount` is a tax-inclusive plan price.
    pub amount_includes_tax: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
