use crate::alert_view::domain::AlertsSnapshot;
use crate::ports::outbound::StoreSubscriber;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Handle returned by [`AlertStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// AlertStore holds the current alert snapshot and notifies subscribers
///
/// Every [`AlertStore::replace`] bumps the version and publishes the new
/// snapshot to all subscribers, in subscription order. Subscribers are
/// called without any store lock held.
pub struct AlertStore {
    snapshot: RwLock<Arc<AlertsSnapshot>>,
    subscribers: Mutex<Vec<(SubscriptionId, Arc<dyn StoreSubscriber>)>>,
    version: AtomicU64,
    next_id: AtomicU64,
}

impl AlertStore {
    pub fn new(snapshot: AlertsSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            subscribers: Mutex::new(Vec::new()),
            version: AtomicU64::new(0),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe(&self, subscriber: Arc<dyn StoreSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, subscriber));
        id
    }

    /// Removes a subscriber; returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    /// Replaces the snapshot and notifies every subscriber
    ///
    /// # Returns
    /// The version assigned to the new snapshot
    pub fn replace(&self, snapshot: AlertsSnapshot) -> u64 {
        let snapshot = Arc::new(snapshot);
        let version = {
            let mut current = self
                .snapshot
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = Arc::clone(&snapshot);
            self.version.fetch_add(1, Ordering::SeqCst) + 1
        };

        let subscribers: Vec<Arc<dyn StoreSubscriber>> = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, s)| Arc::clone(s))
            .collect();

        for subscriber in subscribers {
            subscriber.on_snapshot(&snapshot, version);
        }
        version
    }

    pub fn snapshot(&self) -> Arc<AlertsSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new(AlertsSnapshot::default())
    }
}
