//! # Guard Error Types
//!
//! Errors for the access gate and rate limiter. Route handlers map
//! `NotAllowed` to 403 and `RateLimited` to 429.

use thiserror::Error;

/// Gating failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuardError {
    /// Authenticated identity is not on the staff allow-list.
    #[error("user {user_id} is not permitted to access the panel")]
    NotAllowed { user_id: String },

    /// Key exhausted its request budget for the current window.
    #[error("rate limit exceeded for {key}: retry in {retry_after_secs}s")]
    RateLimited { key: String, retry_after_secs: i64 },
}

/// Convenience type alias for Results with GuardError.
pub type GuardResult<T> = Result<T, GuardError>;
