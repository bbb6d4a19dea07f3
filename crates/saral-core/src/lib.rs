//! # saral-core: Pure Business Logic for Saral Admin
//!
//! This crate is the **heart** of the Saral Admin panel. It contains the
//! panel's business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Saral Admin Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Panel Frontend (external)                       │   │
//! │  │    Record lists ──► Filters ──► Edit forms ──► Billing view    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Route handlers + hosted DB + identity provider           │   │
//! │  │                    (external collaborators)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ saral-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ gst/gstin │  │ validation│  │   │
//! │  │   │  TaxRate  │  │   Money   │  │ compute   │  │ sanitize  │  │   │
//! │  │   │ StateCode │  │  half-up  │  │ breakdown │  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TaxRate, StateCode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`gst`] - GST breakdown computation (CGST/SGST vs IGST)
//! - [`gstin`] - GSTIN validation, formatting, state derivation
//! - [`validation`] - Field validation for staff input
//! - [`sanitize`] - Free-text and search-query sanitization
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in paise (i64) to avoid float errors
//! 4. **Fixed Rounding**: half-up everywhere; financial correctness depends on it
//!
//! ## Example Usage
//!
//! ```rust
//! use saral_core::gst::{compute, GstInput};
//! use saral_core::money::Money;
//! use saral_core::types::{StateCode, TaxRate};
//!
//! let breakdown = compute(&GstInput {
//!     amount: Money::from_paise(100_000),
//!     rate: TaxRate::from_bps(1800),
//!     supply_state: StateCode::parse("27").unwrap(),
//!     customer_state: StateCode::parse("33").unwrap(),
//!     amount_includes_tax: false,
//! })
//! .unwrap();
//!
//! // Interstate supply: full 18% as IGST
//! assert_eq!(breakdown.igst.paise(), 18_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gst;
pub mod gstin;
pub mod money;
pub mod sanitize;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use saral_core::Money` instead of
// `use saral_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use gst::{compute, GstBreakdown, GstInput, GstRegime};
pub use money::Money;
pub use types::{StateCode, TaxRate, GST_SLABS_BPS};
