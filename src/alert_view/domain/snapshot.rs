use super::{AlertGroup, LabelsColorMap};
use serde::{Deserialize, Serialize};

/// Everything the alert list needs for one render pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertsSnapshot {
    #[serde(default)]
    pub groups: Vec<AlertGroup>,
    #[serde(default)]
    pub colors: LabelsColorMap,
}

impl AlertsSnapshot {
    pub fn new(groups: Vec<AlertGroup>) -> Self {
        Self {
            groups,
            colors: LabelsColorMap::new(),
        }
    }

    pub fn alert_count(&self) -> usize {
        self.groups.iter().map(|g| g.alerts.len()).sum()
    }
}
