use crate::alert_view::domain::AlertsSnapshot;

/// Observer notified after every snapshot replacement in the alert store
pub trait StoreSubscriber: Send + Sync {
    /// Called with the new snapshot and the store version it was published as
    ///
    /// Runs after the store lock is released, so it may read the store again.
    fn on_snapshot(&self, snapshot: &AlertsSnapshot, version: u64);
}
