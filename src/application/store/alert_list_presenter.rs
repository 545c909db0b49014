use crate::alert_view::domain::AlertsSnapshot;
use crate::application::read_models::{AlertListView, AlertRowBuilder, RowOptions};
use crate::ports::outbound::{RowCallbacks, StoreSubscriber};
use std::sync::{Mutex, PoisonError};

/// AlertListPresenter re-derives every alert row when the store changes
///
/// Each notification runs a full derivation pass; nothing from a previous
/// pass is reused. The host is told through [`RowCallbacks::after_update`]
/// once the new view is available from [`AlertListPresenter::current_view`].
pub struct AlertListPresenter<C: RowCallbacks> {
    options: RowOptions,
    callbacks: C,
    current: Mutex<Option<(u64, AlertListView)>>,
}

impl<C: RowCallbacks> AlertListPresenter<C> {
    pub fn new(options: RowOptions, callbacks: C) -> Self {
        Self {
            options,
            callbacks,
            current: Mutex::new(None),
        }
    }

    /// Latest derived view, if any notification was received yet
    pub fn current_view(&self) -> Option<AlertListView> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(_, view)| view.clone())
    }

    /// Store version the current view was derived from
    pub fn current_version(&self) -> Option<u64> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|(version, _)| *version)
    }

    pub fn set_menu_open(&self, open: bool) {
        self.callbacks.set_menu_open(open);
    }
}

impl<C: RowCallbacks> StoreSubscriber for AlertListPresenter<C> {
    /// Notifications may arrive out of order when snapshots are replaced
    /// from several threads; one older than the current view is dropped.
    fn on_snapshot(&self, snapshot: &AlertsSnapshot, version: u64) {
        if self.current_version().is_some_and(|current| current >= version) {
            return;
        }
        let view = AlertRowBuilder::build_list(snapshot, &self.options);
        {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            // a newer view may have been stored while this one was built
            if current.as_ref().is_some_and(|(stored, _)| *stored >= version) {
                return;
            }
            *current = Some((version, view));
        }
        self.callbacks.after_update();
    }
}
