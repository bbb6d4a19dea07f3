//! # GST Calculation
//!
//! Splits a charge into its GST components for invoicing.
//!
//! ## Regime Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    GST Regime Selection                                 │
//! │                                                                         │
//! │  supply_state == customer_state        supply_state != customer_state   │
//! │  ───────────────────────────────       ────────────────────────────     │
//! │        INTRASTATE                             INTERSTATE                │
//! │                                                                         │
//! │    tax = CGST + SGST                        tax = IGST                  │
//! │    (rate/2 each)                            (full rate)                 │
//! │                                                                         │
//! │  Example: 18% on ₹1000                  Example: 18% on ₹1000           │
//! │    CGST ₹90 + SGST ₹90                    IGST ₹180                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants (enforced by construction, asserted in tests)
//! - `total_amount == taxable_value + total_tax`, always
//! - intrastate: `cgst + sgst == total_tax` and `|cgst − sgst| ≤ 1` paisa
//! - interstate: `igst == total_tax`, `cgst == sgst == 0`
//!
//! Rounding is half-up everywhere (see [`crate::money`]); the odd paisa
//! of an intrastate split goes to CGST and SGST is derived by
//! subtraction, so no remainder is ever dropped.
//!
//! ## Usage
//! ```rust
//! use saral_core::gst::{compute, GstInput, GstRegime};
//! use saral_core::money::Money;
//! use saral_core::types::{StateCode, TaxRate};
//!
//! let input = GstInput {
//!     amount: Money::from_paise(100_000), // ₹1000.00
//!     rate: TaxRate::from_bps(1800),      // 18%
//!     supply_state: StateCode::parse("29").unwrap(),
//!     customer_state: StateCode::parse("29").unwrap(),
//!     amount_includes_tax: false,
//! };
//! let breakdown = compute(&input).unwrap();
//! assert_eq!(breakdown.regime, GstRegime::Intrastate);
//! assert_eq!(breakdown.cgst.paise(), 9_000);
//! assert_eq!(breakdown.sgst.paise(), 9_000);
//! assert_eq!(breakdown.total_amount.paise(), 118_000);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{StateCode, TaxRate};

// =============================================================================
// Input
// =============================================================================

/// One charge to be broken down, assembled by the caller from the
/// merchant configuration record and the customer record.
///
/// ## Design Notes
/// - Constructed per call, never reused or mutated
/// - `amount_includes_tax` covers both directions the panel needs:
///   plan prices stored tax-inclusive vs. ad-hoc charges entered net
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstInput {
    /// Charge amount in paise. Non-negative; see [`compute`].
    pub amount: Money,

    /// Tax rate in effect for this charge (merchant configuration).
    pub rate: TaxRate,

    /// Seller's registered state (derived from the merchant GSTIN).
    pub supply_state: StateCode,

    /// Buyer's state (place of supply).
    pub customer_state: StateCode,

    /// True if `amount` already contains the tax.
    pub amount_includes_tax: bool,
}

// =============================================================================
// Regime
// =============================================================================

/// Which arm of GST applies to a supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GstRegime {
    /// Same state on both sides: tax splits into CGST + SGST.
    Intrastate,
    /// Cross-state supply: single IGST component.
    Interstate,
}

// =============================================================================
// Breakdown
// =============================================================================

/// Fully populated GST breakdown for one charge.
///
/// Value object: constructed by [`compute`], embedded into the processor
/// line item by saral-billing, then discarded. Never mutated.
///
/// The unused arm is zero, not absent, because the invoicing processor's
/// contract wants every field present on every line.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GstBreakdown {
    /// Net amount the tax was computed on.
    pub taxable_value: Money,

    /// Central GST component (intrastate only, else zero).
    pub cgst: Money,

    /// State GST component (intrastate only, else zero).
    pub sgst: Money,

    /// Integrated GST component (interstate only, else zero).
    pub igst: Money,

    /// Sum of all tax components.
    pub total_tax: Money,

    /// `taxable_value + total_tax`. Equals the input amount when
    /// `amount_includes_tax` was set.
    pub total_amount: Money,

    /// Which regime produced this breakdown.
    pub regime: GstRegime,

    /// CGST rate (half the input rate intrastate, zero interstate).
    pub cgst_rate: TaxRate,

    /// SGST rate (half the input rate intrastate, zero interstate).
    pub sgst_rate: TaxRate,

    /// IGST rate (the full input rate interstate, zero intrastate).
    pub igst_rate: TaxRate,
}

// =============================================================================
// Compute
// =============================================================================

/// Maximum accepted rate: 100% in basis points.
const MAX_RATE_BPS: u32 = 10_000;

/// Computes the GST breakdown for one charge.
///
/// Pure and deterministic: no I/O, no state, same input always yields
/// the same breakdown. Safe to call concurrently from any number of
/// request handlers.
///
/// ## Errors
/// - [`CoreError::NegativeAmount`] if `amount` is below zero
/// - [`CoreError::TaxRateOutOfRange`] if `rate` exceeds 100%
///
/// Malformed amounts and rates are rejected rather than clamped so that
/// a corrupted merchant configuration surfaces as an error in the panel
/// instead of a silently wrong invoice.
pub fn compute(input: &GstInput) -> CoreResult<GstBreakdown> {
    if input.amount.is_negative() {
        return Err(CoreError::NegativeAmount {
            paise: input.amount.paise(),
        });
    }
    if input.rate.bps() > MAX_RATE_BPS {
        return Err(CoreError::TaxRateOutOfRange {
            bps: input.rate.bps(),
        });
    }

    let regime = if input.supply_state == input.customer_state {
        GstRegime::Intrastate
    } else {
        GstRegime::Interstate
    };

    // Base/tax extraction. Both directions use the same half-up rule so
    // they invert each other for rates that divide evenly.
    let (taxable_value, total_tax, total_amount) = if input.amount_includes_tax {
        let base = input.amount.base_from_inclusive_half_up(input.rate);
        (base, input.amount - base, input.amount)
    } else {
        let tax = input.amount.tax_half_up(input.rate);
        (input.amount, tax, input.amount + tax)
    };

    let breakdown = match regime {
        GstRegime::Intrastate => {
            let (cgst, sgst) = total_tax.half_up_halves();
            GstBreakdown {
                taxable_value,
                cgst,
                sgst,
                igst: Money::zero(),
                total_tax,
                total_amount,
                regime,
                cgst_rate: input.rate.half(),
                sgst_rate: input.rate.half(),
                igst_rate: TaxRate::zero(),
            }
        }
        GstRegime::Interstate => GstBreakdown {
            taxable_value,
            cgst: Money::zero(),
            sgst: Money::zero(),
            igst: total_tax,
            total_tax,
            total_amount,
            regime,
            cgst_rate: TaxRate::zero(),
            sgst_rate: TaxRate::zero(),
            igst_rate: input.rate,
        },
    };

    Ok(breakdown)
}

// =============================================================================
// Unit Tests
// =============================================================================
