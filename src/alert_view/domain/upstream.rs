use super::AlertState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One monitoring backend instance reporting an alert
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamSource {
    pub name: String,
    pub cluster: String,
    #[serde(default)]
    pub state: AlertState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// Link to the alert source for this instance
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub silenced_by: Vec<String>,
    #[serde(default)]
    pub inhibited_by: Vec<String>,
}

impl UpstreamSource {
    pub fn new(name: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cluster: cluster.into(),
            ..Default::default()
        }
    }

    pub fn with_silenced_by<I, S>(mut self, silences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.silenced_by = silences.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_inhibited_by<I, S>(mut self, alerts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inhibited_by = alerts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_state(mut self, state: AlertState) -> Self {
        self.state = state;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamKind {
    Alertmanager,
    Sensu,
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamKind::Alertmanager => write!(f, "alertmanager"),
            UpstreamKind::Sensu => write!(f, "sensu"),
        }
    }
}

/// Resolved upstream source list of an alert
///
/// An alert carries sources of exactly one kind; this borrows them out of the
/// alert once so downstream code never probes both optional lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream<'a> {
    Alertmanager(&'a [UpstreamSource]),
    Sensu(&'a [UpstreamSource]),
}

impl<'a> Upstream<'a> {
    pub fn kind(&self) -> UpstreamKind {
        match self {
            Upstream::Alertmanager(_) => UpstreamKind::Alertmanager,
            Upstream::Sensu(_) => UpstreamKind::Sensu,
        }
    }

    pub fn sources(&self) -> &'a [UpstreamSource] {
        match self {
            Upstream::Alertmanager(sources) | Upstream::Sensu(sources) => sources,
        }
    }
}
