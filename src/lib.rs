//! Data Cache - A bounded, thread-safe in-process cache
//!
//! Provides LRU eviction with eviction notifications, safe to share across threads.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedLruCache, CacheStats, DataCache, MissingPolicy, SubscriptionId};
pub use config::Config;
pub use error::{CacheError, Result};
