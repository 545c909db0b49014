use crate::alert_view::domain::AlertsSnapshot;
use crate::application::read_models::AlertListView;

/// RenderResponse - Internal response DTO for the render use case
///
/// Carries the derived view and the snapshot it was derived from, so the
/// caller can seed an [`crate::application::store::AlertStore`] with it.
#[derive(Debug, Clone)]
pub struct RenderResponse {
    pub view: AlertListView,
    pub snapshot: AlertsSnapshot,
}

impl RenderResponse {
    pub fn new(view: AlertListView, snapshot: AlertsSnapshot) -> Self {
        Self { view, snapshot }
    }
}
