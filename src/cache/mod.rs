//! Cache Module
//!
//! Provides a bounded, thread-safe in-memory cache with LRU eviction.

mod entry;
mod lru;
mod notify;
mod stats;
mod store;
mod traits;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::LruTracker;
pub use notify::{EvictionHandler, SubscriptionId};
pub use stats::CacheStats;
pub use store::{BoundedLruCache, MissingPolicy};
pub use traits::DataCache;
