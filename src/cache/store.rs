//! Cache Store Module
//!
//! Main cache engine combining concurrent map storage with LRU tracking.
//!
//! # Locking
//! The recency ledger sits behind a single mutex. Every ledger mutation and
//! every table mutation happens while holding it, as does the table lookup in
//! `get`, so a key is never visible in one structure but not the other.
//! Lock order is always ledger, then table shard.
//!
//! Eviction subscribers never run under the mutex. Victims are collected
//! while locked and reported after the lock is released, so a subscriber may
//! call back into the cache. A panicking subscriber unwinds into the caller
//! of the operation that fired it; the cache is already consistent by then.

use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info, trace};

use crate::cache::notify::Subscribers;
use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, LruTracker, SubscriptionId};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Missing Policy ==
/// What a lookup does when the key is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Fail with `CacheError::NotFound`
    #[default]
    Fail,
    /// Return `Ok(None)`
    ReturnNone,
}

// == Bounded LRU Cache ==
/// Thread-safe cache holding at most `max_capacity` entries, evicting the
/// least recently used one when full.
pub struct BoundedLruCache<K, V> {
    /// Key-value storage
    table: DashMap<K, CacheEntry<V>>,
    /// Recency order; its mutex serializes all eviction decisions
    ledger: Mutex<LruTracker<K>>,
    /// Maximum number of entries allowed
    max_capacity: AtomicUsize,
    /// Eviction callbacks
    subscribers: Subscribers<V>,
    /// Performance statistics
    stats: StatsRecorder,
}

impl<K, V> BoundedLruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache bounded to `max_capacity` entries.
    ///
    /// Fails with `InvalidArgument` when `max_capacity` is 0.
    pub fn new(max_capacity: usize) -> Result<Self> {
        if max_capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "max_capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            table: DashMap::new(),
            ledger: Mutex::new(LruTracker::new()),
            max_capacity: AtomicUsize::new(max_capacity),
            subscribers: Subscribers::default(),
            stats: StatsRecorder::default(),
        })
    }

    /// Creates a cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.max_capacity)
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, marking it most recently used.
    ///
    /// Fails with `NotFound` if the key is absent.
    pub fn get(&self, key: &K) -> Result<V> {
        self.get_with(key, MissingPolicy::Fail)?
            .ok_or(CacheError::NotFound)
    }

    // == Try Get ==
    /// Like [`get`](Self::get), but returns `None` for an absent key.
    pub fn try_get(&self, key: &K) -> Option<V> {
        self.get_with(key, MissingPolicy::ReturnNone)
            .ok()
            .flatten()
    }

    /// Lookup with a caller-chosen policy for absent keys.
    pub fn get_with(&self, key: &K, policy: MissingPolicy) -> Result<Option<V>> {
        let found = {
            let mut ledger = self.ledger.lock();
            let value = self.table.get_mut(key).map(|mut entry| {
                entry.touch();
                entry.value.clone()
            });
            if value.is_some() {
                ledger.touch(key);
            }
            value
        };

        match found {
            Some(value) => {
                self.stats.record_hit();
                trace!("cache hit");
                Ok(Some(value))
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                match policy {
                    MissingPolicy::Fail => Err(CacheError::NotFound),
                    MissingPolicy::ReturnNone => Ok(None),
                }
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair and returns the stored value.
    ///
    /// An existing key is overwritten in place. A new key arriving while the
    /// cache is full evicts the least recently used entry first. Either way
    /// the key ends up most recently used.
    pub fn put(&self, key: K, value: V) -> V {
        let mut victims = Vec::new();
        {
            let mut ledger = self.ledger.lock();
            let overwritten = self
                .table
                .get_mut(&key)
                .map(|mut entry| entry.replace(value.clone()))
                .is_some();

            if !overwritten {
                let capacity = self.max_capacity.load(Ordering::Acquire);
                while ledger.len() >= capacity {
                    match self.evict_oldest(&mut ledger) {
                        Some(victim) => victims.push(victim),
                        None => break,
                    }
                }
                self.table.insert(key.clone(), CacheEntry::new(value.clone()));
            }
            ledger.touch(&key);
        }

        if !victims.is_empty() {
            debug!(evicted = victims.len(), "evicted least recently used entry");
            self.report(&victims);
        }
        value
    }

    // == Resize ==
    /// Changes the capacity bound.
    ///
    /// Shrinking below the current entry count evicts oldest entries first
    /// until the cache fits. Growing never evicts.
    pub fn resize(&self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "new_capacity must be greater than 0".to_string(),
            ));
        }

        let mut victims = Vec::new();
        let old_capacity = {
            let mut ledger = self.ledger.lock();
            let old = self.max_capacity.swap(new_capacity, Ordering::AcqRel);
            while ledger.len() > new_capacity {
                match self.evict_oldest(&mut ledger) {
                    Some(victim) => victims.push(victim),
                    None => break,
                }
            }
            old
        };

        info!(
            old_capacity,
            new_capacity,
            evicted = victims.len(),
            "cache resized"
        );
        self.report(&victims);
        Ok(())
    }

    // == Clear ==
    /// Removes every entry, notifying subscribers once per removed value.
    ///
    /// Subscribers run after the cache is already empty.
    pub fn clear(&self) {
        let victims: Vec<V> = {
            let mut ledger = self.ledger.lock();
            let keys = ledger.drain();
            let victims = keys
                .iter()
                .filter_map(|key| self.table.remove(key).map(|(_, entry)| entry.value))
                .collect();
            victims
        };

        info!(cleared = victims.len(), "cache cleared");
        self.report(&victims);
    }

    // == Subscriptions ==
    /// Registers a handler invoked with every evicted value.
    pub fn subscribe_on_evicted<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&V) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(Arc::new(handler))
    }

    /// Removes a handler. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // == Peek ==
    /// Reads a value without affecting recency.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.table.get(key).map(|entry| entry.value.clone())
    }

    /// Last read or write time of `key` in Unix milliseconds, without affecting recency.
    pub fn last_accessed(&self, key: &K) -> Option<u64> {
        self.table.get(key).map(|entry| entry.last_accessed)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Keys ordered least to most recently used.
    pub fn keys_by_recency(&self) -> Vec<K> {
        self.ledger.lock().keys()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Current capacity bound, reflecting the latest resize.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity.load(Ordering::Acquire)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len(), self.max_capacity())
    }

    /// Removes the least recently used entry from both structures.
    /// Caller must hold the ledger lock.
    fn evict_oldest(&self, ledger: &mut LruTracker<K>) -> Option<V> {
        let key = ledger.evict_oldest()?;
        self.table.remove(&key).map(|(_, entry)| entry.value)
    }

    fn report(&self, victims: &[V]) {
        if victims.is_empty() {
            return;
        }
        self.stats.record_evictions(victims.len());
        self.subscribers.notify(victims);
    }

    /// True when ledger and table hold exactly the same keys.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ledger = self.ledger.lock();
        ledger.len() == self.table.len()
            && self.table.iter().all(|entry| ledger.contains(entry.key()))
    }
}
