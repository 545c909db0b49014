use crate::alert_view::domain::SensuEvent;
use crate::shared::Result;
use async_trait::async_trait;

/// EventSource port for pulling events from a Sensu upstream
///
/// Implementations own their credentials and HTTP client; callers only see
/// the upstream identity and the list of events.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Unique upstream name
    fn name(&self) -> &str;

    /// Upstream URI, used to derive the cluster id of its alerts
    fn uri(&self) -> &str;

    /// Fetches every event visible to this upstream
    ///
    /// # Errors
    /// Returns an error if authentication or any page request fails
    async fn fetch_events(&self) -> Result<Vec<SensuEvent>>;
}
