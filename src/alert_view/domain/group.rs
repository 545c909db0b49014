use super::{Alert, Annotation, Labels};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata shared by every alert in a group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SharedMetadata {
    /// Silence ids already displayed at group level, keyed by cluster
    #[serde(default)]
    pub silences: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl SharedMetadata {
    pub fn silences_for(&self, cluster: &str) -> &[String] {
        self.silences
            .get(cluster)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A batch of related alerts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertGroup {
    pub id: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub shared: SharedMetadata,
}

impl AlertGroup {
    pub fn new(id: impl Into<String>, labels: Labels) -> Self {
        Self {
            id: id.into(),
            labels,
            ..Default::default()
        }
    }
}
