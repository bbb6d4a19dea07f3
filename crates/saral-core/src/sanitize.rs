//! # Input Sanitization
//!
//! Pure string helpers for staff-supplied free text: names, notes,
//! search filters. These run on every form submission and list filter in
//! the panel, so they must be cheap and must never panic.
//!
//! Sanitization is NOT validation: these helpers coerce input into a
//! safe shape, they don't judge it. Use [`crate::validation`] for
//! accept/reject decisions.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Characters with meaning to the query builder's filter syntax.
static QUERY_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[%_;'"\\]+"#).expect("valid query punct regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Cleans free text: strips control characters, collapses runs of
/// whitespace to single spaces, trims, and truncates to `max_len`
/// characters (on a char boundary, never mid-codepoint).
///
/// ## Example
/// ```rust
/// use saral_core::sanitize::sanitize_text;
///
/// assert_eq!(sanitize_text("  hello\t\nworld\u{0000} ", 50), "hello world");
/// assert_eq!(sanitize_text("abcdef", 3), "abc");
/// ```
pub fn sanitize_text(input: &str, max_len: usize) -> String {
    let no_control: String = input.chars().filter(|c| !c.is_control()).collect();
    let collapsed = WHITESPACE_RE.replace_all(&no_control, " ");
    collapsed.trim().chars().take(max_len).collect()
}

/// Maximum length accepted for a list-endpoint search query.
const MAX_QUERY_LEN: usize = 100;

/// Cleans a search/filter query before it reaches the query builder.
///
/// Same treatment as [`sanitize_text`] plus removal of characters the
/// hosted database's filter syntax treats specially (`%`, `_`, quotes,
/// backslash, semicolon). The query builder parameterizes values anyway;
/// stripping here keeps LIKE wildcards from turning a name search into a
/// full-table match.
pub fn sanitize_search_query(input: &str) -> String {
    let cleaned = QUERY_PUNCT_RE.replace_all(input, "");
    sanitize_text(&cleaned, MAX_QUERY_LEN)
}

/// Returns true if `input` looks like a deliverable email address.
///
/// Pragmatic pattern, not RFC 5322: the panel only needs to catch typos
/// before a staff member saves a contact record.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
