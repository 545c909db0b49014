//! Subset of the Sensu Go v2 event model needed to build alerts.
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SensuObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SensuEntity {
    #[serde(default)]
    pub metadata: SensuObjectMeta,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SensuCheck {
    #[serde(default)]
    pub metadata: SensuObjectMeta,
    #[serde(default)]
    pub output: String,
    /// Exit status of the last execution, 0 means healthy
    #[serde(default)]
    pub status: u32,
    /// passing, failing or flapping
    #[serde(default)]
    pub state: String,
    /// Unix timestamp of the last execution
    #[serde(default)]
    pub issued: i64,
    /// Unix timestamp of the last passing execution, 0 if never
    #[serde(default)]
    pub last_ok: i64,
    /// Names of silences currently matching this check
    #[serde(default)]
    pub silenced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SensuEvent {
    #[serde(default)]
    pub entity: SensuEntity,
    #[serde(default)]
    pub check: SensuCheck,
}

impl SensuEvent {
    pub fn is_healthy(&self) -> bool {
        self.check.status == 0
    }
}
