//! # Staff Allow-List
//!
//! The panel is gated by a fixed set of identity-provider user IDs.
//! Sessions are established by the external identity provider; this
//! module only answers whether an already-authenticated ID is permitted.
//!
//! The list is small (single-digit staff count) and changes only with a
//! deploy, so it is constructed once at startup from configuration and
//! shared immutably.

use std::collections::HashSet;

use tracing::warn;

use crate::error::{GuardError, GuardResult};

/// Fixed allow-list of identity-provider user IDs.
#[derive(Debug, Clone)]
pub struct AllowList {
    ids: HashSet<String>,
}

impl AllowList {
    /// Builds the allow-list from configured IDs.
    ///
    /// IDs are trimmed; empty entries are dropped so a trailing comma in
    /// the config can't silently allow the empty string.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { ids }
    }

    /// True if `user_id` is on the list. Exact match, case-sensitive:
    /// identity-provider IDs are opaque tokens, not names.
    pub fn is_allowed(&self, user_id: &str) -> bool {
        self.ids.contains(user_id)
    }

    /// Typed-error variant for use in handler guards.
    pub fn ensure_allowed(&self, user_id: &str) -> GuardResult<()> {
        if self.is_allowed(user_id) {
            Ok(())
        } else {
            warn!(user_id, "rejected panel access for unlisted identity");
            Err(GuardError::NotAllowed {
                user_id: user_id.to_string(),
            })
        }
    }

    /// Number of permitted identities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nobody is permitted (misconfiguration; the panel is
    /// unreachable rather than open).
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
