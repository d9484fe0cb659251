//! Lifecycle kernel: frame-indexed expiry and handle pooling.
//!
//! # Invariants
//! - A pooled handle is either idle in its pool or owned by exactly one
//!   [`TimedEntry`] in an active queue, never both.
//! - Queue eviction stops at the first unexpired head. Entries pushed with a
//!   shorter linger behind a longer one wait until the head expires.
//! - The text table holds at most one entry per key.
//!
//! Pools, queues and the metrics table are safe to share across producer
//! threads. Eviction is expected to run from a single owning thread.

pub mod entry;
pub mod metrics;
pub mod pool;
pub mod queue;
pub mod text;

pub use entry::TimedEntry;
pub use metrics::MetricsTable;
pub use pool::ResourcePool;
pub use queue::ExpiringQueue;
pub use text::TextTable;

pub fn crate_info() -> &'static str {
    "debugdraw-kernel v0.1.0"
}
