//! # Line-Item Shaping
//!
//! Turns a charge plus the two boundary records into the line-item value
//! the external invoicing processor serializes.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoicing Data Flow                                  │
//! │                                                                         │
//! │  MerchantTaxProfile ──┐                                                │
//! │                       ├──► GstInput ──► gst::compute ──► GstBreakdown  │
//! │  CustomerBilling ─────┤                                      │          │
//! │                       │                                      ▼          │
//! │  ChargeRequest ───────┘                            ProcessorLineItem   │
//! │                                                              │          │
//! │                                       route handler serializes to the  │
//! │                                       processor (external)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names and units on [`ProcessorLineItem`] are dictated by the
//! processor's contract: camelCase, minor currency units, rates in
//! integer basis points. Do not rename fields to taste.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use saral_core::gst::{compute, GstBreakdown, GstInput, GstRegime};
use saral_core::money::Money;

use crate::error::BillingResult;
use crate::records::{ChargeRequest, CustomerBilling, MerchantTaxProfile};

// =============================================================================
// Processor Line Item
// =============================================================================

/// One line of the payload sent to the invoicing processor.
///
/// Value object: built, serialized by the caller, discarded. Amounts in
/// paise, rates in basis points, every tax field present even when zero
/// (the processor rejects sparse lines).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorLineItem {
    pub description: String,
    pub taxable_value_paise: i64,
    pub cgst_paise: i64,
    pub sgst_paise: i64,
    pub igst_paise: i64,
    pub total_tax_paise: i64,
    pub total_paise: i64,
    pub tax_rate_bps: u32,
    pub interstate: bool,
    pub place_of_supply: String,
    pub merchant_gstin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_gstin: Option<String>,
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds a processor line item for one charge.
///
/// The returned breakdown is what the panel's billing view renders; the
/// line item is what goes to the processor. Both carry the same numbers.
pub fn build_line_item(
    profile: &MerchantTaxProfile,
    customer: &CustomerBilling,
    charge: &ChargeRequest,
) -> BillingResult<(ProcessorLineItem, GstBreakdown)> {
    let input = GstInput {
        amount: charge.amount,
        rate: charge.rate,
        supply_state: profile.state_code.clone(),
        customer_state: customer.state_code.clone(),
        amount_includes_tax: charge.amount_includes_tax,
    };
    let breakdown = compute(&input)?;

    debug!(
        description = %charge.description,
        regime = ?breakdown.regime,
        taxable = breakdown.taxable_value.paise(),
        tax = breakdown.total_tax.paise(),
        "assembled invoice line item"
    );

    let item = ProcessorLineItem {
        description: charge.description.clone(),
        taxable_value_paise: breakdown.taxable_value.paise(),
        cgst_paise: breakdown.cgst.paise(),
        sgst_paise: breakdown.sgst.paise(),
        igst_paise: breakdown.igst.paise(),
        total_tax_paise: breakdown.total_tax.paise(),
        total_paise: breakdown.total_amount.paise(),
        tax_rate_bps: charge.rate.bps(),
        interstate: breakdown.regime == GstRegime::Interstate,
        place_of_supply: customer.state_code.as_str().to_string(),
        merchant_gstin: profile.gstin.clone(),
        customer_gstin: customer.gstin.clone(),
    };

    Ok((item, breakdown))
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Aggregated totals over an invoice's line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub taxable_value: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

/// Sums line items into invoice totals.
///
/// Per-line rounding already happened; summation is exact, so the sum
/// invariant (`grand_total == taxable_value + total_tax`) survives
/// aggregation.
pub fn summarize(items: &[ProcessorLineItem]) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();
    for item in items {
        totals.taxable_value += Money::from_paise(item.taxable_value_paise);
        totals.total_tax += Money::from_paise(item.total_tax_paise);
        totals.grand_total += Money::from_paise(item.total_paise);
    }
    totals
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use saral_core::types::TaxRate;

    fn profile() -> MerchantTaxProfile {
        MerchantTaxProfile::from_record("29ABCDE1234F1Z5", "Acme SaaS Pvt Ltd", Utc::now())
            .unwrap()
    }

    fn charge(paise: i64, bps: u32, inclusive: bool) -> ChargeRequest {
        ChargeRequest {
            description: "Pro plan - monthly".to_string(),
            amount: Money::from_paise(paise),
            rate: TaxRate::from_bps(bps),
            amount_includes_tax: inclusive,
        }
    }

    #[test]
    fn test_intrastate_line_item() {
        let customer = CustomerBilling::from_record("Buyer", "29", None).unwrap();
        let (item, breakdown) =
            build_line_item(&profile(), &customer, &charge(100_000, 1800, false)).unwrap();

        assert!(!item.interstate);
        assert_eq!(item.taxable_value_paise, 100_000);
        assert_eq!(item.cgst_paise, 9_000);
        assert_eq!(item.sgst_paise, 9_000);
        assert_eq!(item.igst_paise, 0);
        assert_eq!(item.total_paise, 118_000);
        assert_eq!(item.place_of_supply, "29");
        assert_eq!(breakdown.total_tax.paise(), 18_000);
    }

    #[test]
    fn test_interstate_line_item() {
        let customer =
            CustomerBilling::from_record("B2B Buyer", "33", Some("33AAPFU0939F1ZV")).unwrap();
        let (item, _) =
            build_line_item(&profile(), &customer, &charge(100_000, 1800, false)).unwrap();

        assert!(item.interstate);
        assert_eq!(item.igst_paise, 18_000);
        assert_eq!(item.cgst_paise, 0);
        assert_eq!(item.sgst_paise, 0);
        assert_eq!(item.customer_gstin.as_deref(), Some("33AAPFU0939F1ZV"));
    }

    #[test]
    fn test_inclusive_plan_price() {
        // Plan prices are stored tax-inclusive: ₹1180 at 18% → ₹1000 net
        let customer = CustomerBilling::from_record("Buyer", "29", None).unwrap();
        let (item, _) =
            build_line_item(&profile(), &customer, &charge(118_000, 1800, true)).unwrap();
        assert_eq!(item.taxable_value_paise, 100_000);
        assert_eq!(item.total_paise, 118_000);
    }

    #[test]
    fn test_core_rejection_propagates() {
        let customer = CustomerBilling::from_record("Buyer", "29", None).unwrap();
        let mut bad = charge(100, 1800, false);
        bad.amount = Money::from_paise(-5);
        assert!(build_line_item(&profile(), &customer, &bad).is_err());
    }

    #[test]
    fn test_serialized_contract_shape() {
        let customer = CustomerBilling::from_record("Buyer", "29", None).unwrap();
        let (item, _) =
            build_line_item(&profile(), &customer, &charge(100_000, 1800, false)).unwrap();
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["taxableValuePaise"], 100_000);
        assert_eq!(json["taxRateBps"], 1800);
        assert_eq!(json["merchantGstin"], "29ABCDE1234F1Z5");
        // absent customer GSTIN is omitted, not null
        assert!(json.get("customerGstin").is_none());
    }

    #[test]
    fn test_summarize_preserves_sum_invariant() {
        let customer = CustomerBilling::from_record("Buyer", "29", None).unwrap();
        let charges = [
            charge(100_000, 1800, false),
            charge(417, 1800, false), // odd-paisa split line
            charge(9_999, 500, true),
        ];
        let items: Vec<ProcessorLineItem> = charges
            .iter()
            .map(|c| build_line_item(&profile(), &customer, c).unwrap().0)
            .collect();

        let totals = summarize(&items);
        assert_eq!(
            totals.grand_total,
            totals.taxable_value + totals.total_tax
        );
        assert_eq!(
            totals.grand_total.paise(),
            items.iter().map(|i| i.total_paise).sum::<i64>()
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), InvoiceTotals::default());
    }
}
