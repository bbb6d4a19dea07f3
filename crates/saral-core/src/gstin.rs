//! # GSTIN Helpers
//!
//! Validation, display formatting, and state derivation for GSTINs
//! (Goods and Services Tax Identification Numbers).
//!
//! ## GSTIN Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   2 9 A B C D E 1 2 3 4 F 1 Z 5     (15 characters, upper-case)        │
//! │   ─┬─ ────────┬──────── ┬ ┬ ┬ ┬                                        │
//! │    │          │         │ │ │ └── check character (alnum)              │
//! │    │          │         │ │ └──── literal 'Z'                          │
//! │    │          │         │ └────── entity number (alnum)                │
//! │    │          │         └──────── last PAN letter                      │
//! │    │          └────────────────── PAN core: 5 letters + 4 digits       │
//! │    └───────────────────────────── state code ("29" = Karnataka)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! These helpers run inline in request handlers on staff-supplied input,
//! so they are total functions: malformed input yields `false`, the
//! unchanged string, or `None`. They never return an error and never
//! panic. Callers that need a typed error use
//! [`crate::validation::validate_gstin_field`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::StateCode;

/// Pattern for a structurally valid GSTIN.
///
/// Case-sensitive on purpose: registrations are issued upper-case and we
/// do not normalize before validating, so `29abcde1234f1z5` is rejected.
static GSTIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][0-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN regex")
});

/// Returns true if `code` is a structurally valid GSTIN.
///
/// Structural check only; the checksum character is matched by class,
/// not recomputed (registrations are verified against the GST portal by
/// a separate panel workflow).
///
/// ## Example
/// ```rust
/// use saral_core::gstin::is_valid_gstin;
///
/// assert!(is_valid_gstin("29ABCDE1234F1Z5"));
/// assert!(!is_valid_gstin("29abcde1234f1z5")); // lower-case rejected
/// assert!(!is_valid_gstin("29ABCDE1234F1Z"));  // 14 chars
/// ```
pub fn is_valid_gstin(code: &str) -> bool {
    GSTIN_RE.is_match(code)
}

/// Formats a 15-character GSTIN for display: `29 ABCDE1234F 1Z5`
/// (state / PAN / suffix).
///
/// Performs NO validation: callers must validate first if correctness
/// matters. Anything that isn't exactly 15 characters comes back
/// unchanged, so the panel can echo bad input verbatim next to the
/// validation message.
pub fn format_gstin(code: &str) -> String {
    // byte length is fine: a valid GSTIN is pure ASCII, and non-ASCII
    // input takes the unchanged path
    if code.len() != 15 || !code.is_ascii() {
        return code.to_string();
    }
    format!("{} {} {}", &code[0..2], &code[2..12], &code[12..15])
}

/// Derives the registration state from a GSTIN.
///
/// Returns the leading two-digit state code iff the whole GSTIN
/// validates AND the prefix is a known GST state code; `None` otherwise.
///
/// ## Example
/// ```rust
/// use saral_core::gstin::state_code_from_gstin;
///
/// let state = state_code_from_gstin("29ABCDE1234F1Z5").unwrap();
/// assert_eq!(state.as_str(), "29");
/// assert!(state_code_from_gstin("nonsense").is_none());
/// ```
pub fn state_code_from_gstin(code: &str) -> Option<StateCode> {
    if !is_valid_gstin(code) {
        return None;
    }
    StateCode::parse(&code[0..2])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "29ABCDE1234F1Z5";

    #[test]
    fn test_valid_gstins() {
        assert!(is_valid_gstin(VALID));
        assert!(is_valid_gstin("27AAPFU0939F1ZV"));
        assert!(is_valid_gstin("07AABCU9603R1ZM"));
        // entity number and check char may be digits or letters
        assert!(is_valid_gstin("29ABCDE1234FAZB"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_gstin(""));
        assert!(!is_valid_gstin("29ABCDE1234F1Z"));   // 14
        assert!(!is_valid_gstin("29ABCDE1234F1Z55")); // 16
    }

    #[test]
    fn test_rejects_lower_case() {
        assert!(!is_valid_gstin("29abcde1234f1z5"));
        assert!(!is_valid_gstin("29ABCDE1234f1Z5")); // one lower-case letter
    }

    #[test]
    fn test_rejects_structural_violations() {
        assert!(!is_valid_gstin("2AABCDE1234F1Z5")); // letter in state code
        assert!(!is_valid_gstin("29ABCD11234F1Z5")); // digit in PAN letters
        assert!(!is_valid_gstin("29ABCDE123AF1Z5")); // letter in PAN digits
        assert!(!is_valid_gstin("29ABCDE1234F1X5")); // 14th char must be Z
        assert!(!is_valid_gstin("29ABCDE1234F1Z!")); // punctuation
    }

    #[test]
    fn test_format_inserts_display_groups() {
        assert_eq!(format_gstin(VALID), "29 ABCDE1234F 1Z5");
    }

    #[test]
    fn test_format_passes_through_wrong_length() {
        assert_eq!(format_gstin(""), "");
        assert_eq!(format_gstin("short"), "short");
        assert_eq!(format_gstin("29ABCDE1234F1Z55"), "29ABCDE1234F1Z55");
        // already-formatted output is 17 chars, so formatting twice is
        // a pass-through, not a double-spacing
        assert_eq!(format_gstin(&format_gstin(VALID)), "29 ABCDE1234F 1Z5");
    }

    #[test]
    fn test_format_then_strip_reproduces_code() {
        let formatted = format_gstin(VALID);
        let stripped: String = formatted.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(stripped, VALID);
    }

    #[test]
    fn test_format_non_ascii_passes_through() {
        // 15 chars but multi-byte: must not slice mid-codepoint
        let weird = "२९ABCDE1234F1Z"; // devanagari digits
        assert_eq!(format_gstin(weird), weird);
    }

    #[test]
    fn test_state_derivation() {
        let state = state_code_from_gstin(VALID).unwrap();
        assert_eq!(state.as_str(), "29");
        assert_eq!(state.name(), "Karnataka");
    }

    #[test]
    fn test_state_derivation_sentinels() {
        assert!(state_code_from_gstin("").is_none());
        assert!(state_code_from_gstin("29abcde1234f1z5").is_none());
        // structurally valid shape but unknown state prefix
        assert!(state_code_from_gstin("00ABCDE1234F1Z5").is_none());
    }
}
