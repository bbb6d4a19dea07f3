//! # saral-billing: Invoicing Boundary for Saral Admin
//!
//! Where the hosted database's loosely-shaped rows become typed records,
//! and where GST breakdowns become the line-item values the external
//! invoicing processor serializes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Route handler (external)                                              │
//! │    │ fetches merchant config row + customer row                        │
//! │    ▼                                                                    │
//! │  saral-billing (THIS CRATE)                                            │
//! │    │ MerchantTaxProfile::from_record   ← validate once, type forever   │
//! │    │ CustomerBilling::from_record                                      │
//! │    │ build_line_item ──► saral_core::gst::compute                      │
//! │    ▼                                                                    │
//! │  ProcessorLineItem ──► serialized to the invoicing processor          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Still no I/O: this crate shapes in-memory values only. Fetching rows
//! and POSTing payloads belong to the external collaborators.

pub mod error;
pub mod invoice;
pub mod records;

pub use error::{BillingError, BillingResult};
pub use invoice::{build_line_item, summarize, InvoiceTotals, ProcessorLineItem};
pub use records::{ChargeRequest, CustomerBilling, MerchantTaxProfile};
