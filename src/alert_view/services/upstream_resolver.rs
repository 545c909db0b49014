use crate::alert_view::domain::{Alert, Upstream};

/// Selects the upstream source list of an alert
///
/// Alertmanager sources win over Sensu sources. A present but empty list
/// still counts as present. `None` means the alert cannot be rendered; callers
/// must render nothing for it rather than fail.
pub fn resolve_upstream(alert: &Alert) -> Option<Upstream<'_>> {
    if let Some(sources) = alert.alertmanager.as_deref() {
        return Some(Upstream::Alertmanager(sources));
    }
    alert.sensu.as_deref().map(Upstream::Sensu)
}
