//! LRU Tracker Module
//!
//! Implements the recency ledger used to choose eviction victims.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps a key with a fresh, strictly increasing tick:
/// - `order` maps tick -> key, so the first entry is the least recently used
/// - `ticks` maps key -> tick, so a key can be located without scanning
///
/// Each tracked key appears exactly once in both maps.
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Keys ordered by access tick, oldest first
    order: BTreeMap<u64, K>,
    /// Current tick of every tracked key
    ticks: HashMap<K, u64>,
    /// Next tick to hand out
    next_tick: u64,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            order: BTreeMap::new(),
            ticks: HashMap::new(),
            next_tick: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// If the key is tracked it moves to the newest end, otherwise it is appended there.
    pub fn touch(&mut self, key: &K) {
        let tick = self.next_tick;
        self.next_tick += 1;

        match self.ticks.get_mut(key) {
            Some(old) => {
                let stale = std::mem::replace(old, tick);
                if let Some(k) = self.order.remove(&stale) {
                    self.order.insert(tick, k);
                }
            }
            None => {
                self.ticks.insert(key.clone(), tick);
                self.order.insert(tick, key.clone());
            }
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    // == Drain ==
    /// Removes every key, returning them oldest first.
    pub fn drain(&mut self) -> Vec<K> {
        self.ticks.clear();
        std::mem::take(&mut self.order).into_values().collect()
    }

    // == Keys ==
    /// Snapshot of tracked keys, oldest first.
    pub fn keys(&self) -> Vec<K> {
        self.order.values().cloned().collect()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.ticks.contains_key(key)
    }
}
