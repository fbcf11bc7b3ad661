//! Cache Trait Module
//!
//! Object-safe interface for bounded caches with eviction notifications.

use std::hash::Hash;

use crate::cache::{BoundedLruCache, EvictionHandler, SubscriptionId};
use crate::error::Result;

/// A bounded cache that reports evicted values to its subscribers.
pub trait DataCache<K, V>: Send + Sync {
    /// Retrieves a value, failing with `NotFound` if absent.
    fn get(&self, key: &K) -> Result<V>;

    /// Retrieves a value, or `None` if absent.
    fn try_get(&self, key: &K) -> Option<V>;

    /// Inserts or overwrites a value, returning the stored value.
    fn put(&self, key: K, value: V) -> V;

    /// Changes the capacity bound. Shrinking evicts oldest entries.
    fn resize(&self, new_capacity: usize) -> Result<()>;

    /// Removes every entry.
    fn clear(&self);

    /// Current capacity bound.
    fn max_capacity(&self) -> usize;

    /// Registers an eviction handler.
    fn subscribe_on_evicted(&self, handler: EvictionHandler<V>) -> SubscriptionId;
}

impl<K, V> DataCache<K, V> for BoundedLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Result<V> {
        BoundedLruCache::get(self, key)
    }

    fn try_get(&self, key: &K) -> Option<V> {
        BoundedLruCache::try_get(self, key)
    }

    fn put(&self, key: K, value: V) -> V {
        BoundedLruCache::put(self, key, value)
    }

    fn resize(&self, new_capacity: usize) -> Result<()> {
        BoundedLruCache::resize(self, new_capacity)
    }

    fn clear(&self) {
        BoundedLruCache::clear(self)
    }

    fn max_capacity(&self) -> usize {
        BoundedLruCache::max_capacity(self)
    }

    fn subscribe_on_evicted(&self, handler: EvictionHandler<V>) -> SubscriptionId {
        BoundedLruCache::subscribe_on_evicted(self, move |value: &V| handler(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_trait_object_usage() {
        let cache: Arc<dyn DataCache<u32, String>> = Arc::new(BoundedLruCache::new(2).unwrap());
        let evictions = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&evictions);
        cache.subscribe_on_evicted(Arc::new(move |_: &String| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        cache.put(1, "a".to_string());
        cache.put(2, "b".to_string());
        cache.put(3, "c".to_string());

        assert_eq!(evictions.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get(&1), Err(CacheError::NotFound));
        assert_eq!(cache.try_get(&3), Some("c".to_string()));

        cache.resize(1).unwrap();
        assert_eq!(cache.max_capacity(), 1);
        assert_eq!(evictions.load(Ordering::SeqCst), 2);

        cache.clear();
        assert_eq!(cache.try_get(&3), None);
        assert_eq!(evictions.load(Ordering::SeqCst), 3);
    }
}
