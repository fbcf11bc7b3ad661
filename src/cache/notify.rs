//! Eviction Notification Module
//!
//! Holds the per-cache list of eviction subscribers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Callback invoked with each evicted value.
pub type EvictionHandler<V> = Arc<dyn Fn(&V) + Send + Sync>;

// == Subscription Id ==
/// Handle returned by a subscription, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// == Subscribers ==
/// Registered eviction handlers, invoked in subscription order.
pub(crate) struct Subscribers<V> {
    handlers: RwLock<Vec<(SubscriptionId, EvictionHandler<V>)>>,
    next_id: AtomicU64,
}

impl<V> Default for Subscribers<V> {
    fn default() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }
}

impl<V> fmt::Debug for Subscribers<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.len())
            .finish()
    }
}

impl<V> Subscribers<V> {
    pub fn subscribe(&self, handler: EvictionHandler<V>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, handler));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    // == Notify ==
    /// Fires every handler once per victim, victims in the order given.
    ///
    /// Handlers are cloned out of the lock first, so a handler may subscribe
    /// or unsubscribe without deadlocking. Such changes apply from the next
    /// notification on.
    pub fn notify(&self, victims: &[V]) {
        if victims.is_empty() {
            return;
        }
        let handlers: Vec<EvictionHandler<V>> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        for victim in victims {
            for handler in &handlers {
                handler(victim);
            }
        }
    }
}
