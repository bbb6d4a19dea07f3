//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  GST returns are reconciled to the paisa. A breakdown that is off by    │
//! │  even one paisa fails the invariant total = taxable + tax and gets      │
//! │  rejected downstream by the invoicing processor.                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹118.00 = 11800 paise. Every rounding step is explicit half-up       │
//! │    integer arithmetic, and every remainder has a documented home.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use saral_core::money::Money;
//!
//! // Create from paise (preferred)
//! let price = Money::from_paise(1099); // ₹10.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_paise(500); // ₹15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction must be closed; credit notes upstream
///   may carry negative values even though the GST calculator rejects them
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Tax on this amount at `rate`, rounded half-up.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF-UP, FIXED EVERYWHERE                                    │
    /// │                                                                     │
    /// │  Formula: (paise × bps + 5000) / 10000                             │
    /// │  The +5000 is half the divisor, so an exact .5 paisa rounds up.    │
    /// │                                                                     │
    /// │  The same rule is used for base extraction from tax-inclusive       │
    /// │  amounts and for the CGST half, so the sum invariants in the GST    │
    /// │  module hold exactly. Do not change one call site without the       │
    /// │  others.                                                            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    /// use saral_core::types::TaxRate;
    ///
    /// let price = Money::from_paise(100_000); // ₹1000.00
    /// let rate = TaxRate::from_bps(1800);     // 18%
    /// assert_eq!(price.tax_half_up(rate).paise(), 18_000);
    /// ```
    pub fn tax_half_up(&self, rate: TaxRate) -> Money {
        // i128 prevents overflow on large amounts
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(tax as i64)
    }

    /// Base amount hidden inside a tax-inclusive total, rounded half-up.
    ///
    /// Inverse of adding tax at `rate`: `base = amount / (1 + rate)`.
    /// Implemented as half-up integer division so that the exclusive
    /// recomputation on the derived base reproduces the original total
    /// whenever the rate divides evenly (see tests in the gst module for
    /// the drift cases).
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    /// use saral_core::types::TaxRate;
    ///
    /// let total = Money::from_paise(118_000); // ₹1180.00 incl. 18% GST
    /// let base = total.base_from_inclusive_half_up(TaxRate::from_bps(1800));
    /// assert_eq!(base.paise(), 100_000);
    /// ```
    pub fn base_from_inclusive_half_up(&self, rate: TaxRate) -> Money {
        let denom = 10000i128 + rate.bps() as i128;
        // half-up: floor((2·x·10000 + denom) / (2·denom))
        let base = (self.0 as i128 * 10000 * 2 + denom) / (denom * 2);
        Money(base as i64)
    }

    /// Splits this amount into two halves that sum back exactly.
    ///
    /// The first half is rounded half-up, the second is derived by
    /// subtraction so the odd paisa is never dropped. Used for the
    /// CGST/SGST split.
    ///
    /// ## Example
    /// ```rust
    /// use saral_core::money::Money;
    ///
    /// let (a, b) = Money::from_paise(101).half_up_halves();
    /// assert_eq!(a.paise(), 51);
    /// assert_eq!(b.paise(), 50);
    /// assert_eq!((a + b).paise(), 101);
    /// ```
    pub const fn half_up_halves(&self) -> (Money, Money) {
        let first = (self.0 + 1) / 2;
        (Money(first), Money(self.0 - first))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The panel frontend formats amounts
/// itself (lakh/crore grouping), so keep this plain.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(1000).paise(), 100_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_tax_half_up_basic() {
        // ₹10.00 at 5% = ₹0.50
        let amount = Money::from_paise(1000);
        let tax = amount.tax_half_up(TaxRate::from_bps(500));
        assert_eq!(tax.paise(), 50);
    }

    #[test]
    fn test_tax_half_up_rounds_half_up() {
        // 25 paise at 18% = 4.5 → rounds UP to 5; 250 at 18% = 45 exact
        assert_eq!(Money::from_paise(25).tax_half_up(TaxRate::from_bps(1800)).paise(), 5);
        assert_eq!(Money::from_paise(250).tax_half_up(TaxRate::from_bps(1800)).paise(), 45);
    }

    #[test]
    fn test_base_from_inclusive() {
        let total = Money::from_paise(118_000);
        let base = total.base_from_inclusive_half_up(TaxRate::from_bps(1800));
        assert_eq!(base.paise(), 100_000);

        // 12% slab: 11200 incl → 10000 base
        let total = Money::from_paise(11_200);
        let base = total.base_from_inclusive_half_up(TaxRate::from_bps(1200));
        assert_eq!(base.paise(), 10_000);
    }

    #[test]
    fn test_base_from_inclusive_zero_rate() {
        let total = Money::from_paise(9999);
        let base = total.base_from_inclusive_half_up(TaxRate::zero());
        assert_eq!(base.paise(), 9999);
    }

    #[test]
    fn test_half_up_halves_even_and_odd() {
        let (a, b) = Money::from_paise(18_000).half_up_halves();
        assert_eq!(a.paise(), 9000);
        assert_eq!(b.paise(), 9000);

        let (a, b) = Money::from_paise(75).half_up_halves();
        assert_eq!(a.paise(), 38);
        assert_eq!(b.paise(), 37);
        assert_eq!((a + b).paise(), 75);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_paise(-100).is_negative());
    }

    /// Large amounts must not overflow the intermediate multiplication.
    #[test]
    fn test_tax_half_up_large_amount() {
        // ₹10 crore = 1_000_000_000 paise at 28%
        let amount = Money::from_paise(1_000_000_000);
        let tax = amount.tax_half_up(TaxRate::from_bps(2800));
        assert_eq!(tax.paise(), 280_000_000);
    }
}
