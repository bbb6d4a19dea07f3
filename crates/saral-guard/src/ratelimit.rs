//! # Rate Limiting
//!
//! Fixed-window rate limiting behind an injected counter store.
//!
//! ## Why Injected?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rate Limiter Seams                                   │
//! │                                                                         │
//! │  RateLimiter (policy: max hits per window)                             │
//! │       │                                                                 │
//! │       │  check(store, key, now)                                        │
//! │       ▼                                                                 │
//! │  dyn CounterStore (mechanism: who has hit how often)                   │
//! │       │                                                                 │
//! │       ├── MemoryCounterStore   (this crate, per-process)               │
//! │       └── hosted KV store      (host app, if the panel ever scales     │
//! │                                 past one process)                      │
//! │                                                                         │
//! │  `now` comes from the caller, so tests never sleep and never read      │
//! │  the wall clock.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fixed windows (not sliding): a key gets `max_hits` per aligned window
//! of `window_secs`. The burst-at-boundary artifact of fixed windows is
//! acceptable for a staff panel; the limiter exists to stop runaway
//! scripts, not adversaries.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{GuardError, GuardResult};

// =============================================================================
// Counter Store
// =============================================================================

/// Storage seam for hit counters.
///
/// Implementations must be safe to call from concurrent handlers; the
/// limiter itself holds no state.
pub trait CounterStore: Send + Sync {
    /// Records a hit for `key` in the window starting at
    /// `window_start` (unix seconds) and returns the count for that
    /// window, including this hit.
    fn record_hit(&self, key: &str, window_start: i64) -> u64;
}

/// Per-process counter store.
///
/// Keeps one live window per key: a hit in a newer window discards the
/// stale counter, so memory stays bounded by the number of distinct
/// keys.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    // key → (window_start, hits in that window)
    counters: Mutex<HashMap<String, (i64, u64)>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn record_hit(&self, key: &str, window_start: i64) -> u64 {
        // lock() only fails if a holder panicked; counters carry no
        // invariants worth poisoning over
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        let entry = counters.entry(key.to_string()).or_insert((window_start, 0));
        if entry.0 != window_start {
            *entry = (window_start, 0);
        }
        entry.1 += 1;
        entry.1
    }
}

// =============================================================================
// Rate Limiter
// =============================================================================

/// Fixed-window rate limit policy.
#[derive(Debug, Clone, Copy)]
pub struct RateLimiter {
    /// Hits allowed per window.
    pub max_hits: u64,
    /// Window length in seconds (windows are aligned to the epoch).
    pub window_secs: i64,
}

impl RateLimiter {
    pub const fn new(max_hits: u64, window_secs: i64) -> Self {
        Self {
            max_hits,
            window_secs,
        }
    }

    /// Records a hit for `key` and rejects it if the key is over budget.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use saral_guard::ratelimit::{MemoryCounterStore, RateLimiter};
    ///
    /// let limiter = RateLimiter::new(2, 60);
    /// let store = MemoryCounterStore::new();
    /// let now = Utc::now();
    ///
    /// assert!(limiter.check(&store, "user_a", now).is_ok());
    /// assert!(limiter.check(&store, "user_a", now).is_ok());
    /// assert!(limiter.check(&store, "user_a", now).is_err()); // third hit
    /// ```
    pub fn check(
        &self,
        store: &dyn CounterStore,
        key: &str,
        now: DateTime<Utc>,
    ) -> GuardResult<()> {
        let epoch = now.timestamp();
        let window_start = epoch - epoch.rem_euclid(self.window_secs);

        let hits = store.record_hit(key, window_start);
        if hits > self.max_hits {
            let retry_after_secs = window_start + self.window_secs - epoch;
            warn!(key, hits, max = self.max_hits, "rate limit exceeded");
            return Err(GuardError::RateLimited {
                key: key.to_string(),
                retry_after_secs,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_allows_up_to_budget() {
        let limiter = RateLimiter::new(3, 60);
        let store = MemoryCounterStore::new();
        for _ in 0..3 {
            assert!(limiter.check(&store, "k", at(1_000)).is_ok());
        }
        assert!(limiter.check(&store, "k", at(1_000)).is_err());
    }

    #[test]
    fn test_budget_resets_in_next_window() {
        let limiter = RateLimiter::new(1, 60);
        let store = MemoryCounterStore::new();

        // window [960, 1020)
        assert!(limiter.check(&store, "k", at(1_000)).is_ok());
        assert!(limiter.check(&store, "k", at(1_019)).is_err());
        // next window [1020, 1080)
        assert!(limiter.check(&store, "k", at(1_020)).is_ok());
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(1, 60);
        let store = MemoryCounterStore::new();
        assert!(limiter.check(&store, "a", at(1_000)).is_ok());
        assert!(limiter.check(&store, "b", at(1_000)).is_ok());
        assert!(limiter.check(&store, "a", at(1_000)).is_err());
    }

    #[test]
    fn test_retry_after_points_at_window_end() {
        let limiter = RateLimiter::new(1, 60);
        let store = MemoryCounterStore::new();
        limiter.check(&store, "k", at(1_000)).unwrap();
        let err = limiter.check(&store, "k", at(1_005)).unwrap_err();
        assert_eq!(
            err,
            GuardError::RateLimited {
                key: "k".to_string(),
                retry_after_secs: 15, // window [960, 1020) ends 15s after 1005
            }
        );
    }

    #[test]
    fn test_custom_store_is_injectable() {
        // A store that claims everyone is over budget, to prove the
        // limiter consults the seam rather than private state.
        struct Saturated;
        impl CounterStore for Saturated {
            fn record_hit(&self, _key: &str, _window_start: i64) -> u64 {
                u64::MAX
            }
        }

        let limiter = RateLimiter::new(1_000, 60);
        assert!(limiter.check(&Saturated, "k", at(0)).is_err());
    }
}
