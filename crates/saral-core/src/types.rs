//! # Domain Types
//!
//! Core domain types used throughout Saral Admin.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    TaxRate      │   │   StateCode     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  "27" = MH      │                             │
//! │  │  1800 = 18%     │   │  "29" = KA      │                             │
//! │  │  half() → 9%    │   │  name() lookup  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Both flow into gst::compute(); StateCode equality decides the          │
//! │  intrastate/interstate regime.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// GST slabs in basis points: 0%, 5%, 12%, 18%, 28%.
///
/// The panel only offers these in its rate dropdown, but the calculator
/// accepts any rate in 0..=10000 bps (merchant configs have carried odd
/// legacy rates like 6% composition).
pub const GST_SLABS_BPS: [u32; 5] = [0, 500, 1200, 1800, 2800];

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the standard GST slab for SaaS services)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Half of this rate, for the CGST/SGST split.
    ///
    /// GST slabs are even multiples of 100 bps so the half is exact for
    /// every standard slab; for odd legacy rates the half loses 0.5 bps,
    /// which only affects the *displayed* component rates. Component
    /// amounts are split from the tax total, never recomputed from the
    /// halved rate.
    #[inline]
    pub const fn half(&self) -> Self {
        TaxRate(self.0 / 2)
    }

    /// True if this is one of the standard GST slabs.
    pub fn is_standard_slab(&self) -> bool {
        GST_SLABS_BPS.contains(&self.0)
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// State Code
// =============================================================================

/// GST state codes as notified for GSTIN prefixes.
///
/// "97" (Other Territory) and "96"/"99" (foreign/other) appear on
/// registrations the panel occasionally sees; keep them accepted.
const STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("25", "Daman and Diu"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh (old)"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("96", "Foreign Country"),
    ("97", "Other Territory"),
    ("99", "Centre Jurisdiction"),
];

/// A two-digit GST state code (the leading digits of a GSTIN).
///
/// Equality on this type is what selects the tax regime: same code on
/// both sides of a supply means intrastate (CGST + SGST), different
/// codes mean interstate (IGST).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StateCode(String);

impl StateCode {
    /// Parses a state code, accepting only known GST codes.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::types::StateCode;
    ///
    /// assert!(StateCode::parse("27").is_some()); // Maharashtra
    /// assert!(StateCode::parse("00").is_none());
    /// assert!(StateCode::parse("MH").is_none());
    /// ```
    pub fn parse(code: &str) -> Option<Self> {
        STATE_CODES
            .iter()
            .any(|(c, _)| *c == code)
            .then(|| StateCode(code.to_string()))
    }

    /// Returns the raw two-digit code.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable state name for the panel.
    pub fn name(&self) -> &'static str {
        STATE_CODES
            .iter()
            .find(|(c, _)| *c == self.0)
            .map(|(_, n)| *n)
            // parse() is the only constructor, so the code is always known
            .unwrap_or("Unknown")
    }

    /// True if `code` is a known GST state code.
    pub fn is_known(code: &str) -> bool {
        STATE_CODES.iter().any(|(c, _)| *c == code)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_basics() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert_eq!(rate.percentage(), 18.0);
        assert_eq!(rate.half().bps(), 900);
        assert!(rate.is_standard_slab());
        assert!(!TaxRate::from_bps(600).is_standard_slab());
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        assert_eq!(TaxRate::from_percentage(18.0).bps(), 1800);
        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1800).to_string(), "18.00%");
        assert_eq!(TaxRate::from_bps(250).to_string(), "2.50%");
    }

    #[test]
    fn test_state_code_parse() {
        let mh = StateCode::parse("27").unwrap();
        assert_eq!(mh.as_str(), "27");
        assert_eq!(mh.name(), "Maharashtra");

        assert!(StateCode::parse("38").is_some()); // Ladakh
        assert!(StateCode::parse("97").is_some()); // Other Territory
        assert!(StateCode::parse("00").is_none());
        assert!(StateCode::parse("40").is_none());
        assert!(StateCode::parse("").is_none());
    }

    #[test]
    fn test_state_code_equality_drives_regime() {
        let a = StateCode::parse("29").unwrap();
        let b = StateCode::parse("29").unwrap();
        let c = StateCode::parse("33").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
