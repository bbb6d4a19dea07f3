//! # saral-guard: Access Gate + Rate Limiting for Saral Admin
//!
//! Two small gates every panel request passes through after the external
//! identity provider has established a session:
//!
//! 1. [`allowlist::AllowList`] - is this identity-provider user ID one
//!    of ours?
//! 2. [`ratelimit::RateLimiter`] - is this key within its request
//!    budget?
//!
//! Both are pure policy over injected state: the allow-list is built
//! once from configuration, and the limiter talks to a
//! [`ratelimit::CounterStore`] seam with the caller supplying `now`.
//! Nothing in this crate reads a clock, a socket, or a global.

pub mod allowlist;
pub mod error;
pub mod ratelimit;

pub use allowlist::AllowList;
pub use error::{GuardError, GuardResult};
pub use ratelimit::{CounterStore, MemoryCounterStore, RateLimiter};
