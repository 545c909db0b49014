use super::{AlertState, Annotation, Labels, UpstreamSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single alert as delivered by the alert store
///
/// Exactly one of `alertmanager` / `sensu` is expected to be set; see
/// [`crate::alert_view::services::resolve_upstream`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub state: AlertState,
    #[serde(default)]
    pub receiver: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alertmanager: Option<Vec<UpstreamSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensu: Option<Vec<UpstreamSource>>,
}

impl Alert {
    pub fn new(labels: Labels, state: AlertState) -> Self {
        Self {
            labels,
            state,
            ..Default::default()
        }
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    pub fn with_starts_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn with_alertmanager(mut self, sources: Vec<UpstreamSource>) -> Self {
        self.alertmanager = Some(sources);
        self
    }

    pub fn with_sensu(mut self, sources: Vec<UpstreamSource>) -> Self {
        self.sensu = Some(sources);
        self
    }

    /// Identity of the alert, derived from its label set only
    pub fn fingerprint(&self) -> String {
        self.labels.fingerprint()
    }

    /// Mutable access to whichever upstream list is present, in resolver order
    pub fn upstream_sources_mut(&mut self) -> Option<&mut Vec<UpstreamSource>> {
        if self.alertmanager.is_some() {
            self.alertmanager.as_mut()
        } else {
            self.sensu.as_mut()
        }
    }
}
