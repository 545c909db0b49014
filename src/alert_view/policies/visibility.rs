use crate::alert_view::domain::{AlertGroup, Annotation, Labels};
use serde::Deserialize;

/// Keep/strip list pair
///
/// A non-empty `keep` list hides everything not on it; `strip` then hides
/// names on it. Both empty lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeepStripFilter {
    #[serde(default)]
    pub keep: Vec<String>,
    #[serde(default)]
    pub strip: Vec<String>,
}

impl KeepStripFilter {
    pub fn new(keep: Vec<String>, strip: Vec<String>) -> Self {
        Self { keep, strip }
    }

    pub fn allows(&self, name: &str) -> bool {
        if !self.keep.is_empty() && !self.keep.iter().any(|k| k == name) {
            return false;
        }
        !self.strip.iter().any(|s| s == name)
    }
}

/// What the user wants to see of labels, annotations and receivers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityPolicy {
    pub labels: KeepStripFilter,
    pub annotations: KeepStripFilter,
    pub receivers: KeepStripFilter,
}

impl VisibilityPolicy {
    pub fn is_noop(&self) -> bool {
        *self == VisibilityPolicy::default()
    }

    pub fn allows_receiver(&self, receiver: &str) -> bool {
        self.receivers.allows(receiver)
    }

    pub fn strip_labels(&self, labels: &mut Labels) {
        labels.retain(|name| self.labels.allows(name));
    }

    pub fn strip_annotations(&self, annotations: &mut Vec<Annotation>) {
        annotations.retain(|a| self.annotations.allows(&a.name));
    }

    /// Applies the policy to already merged groups
    ///
    /// Alerts of rejected receivers are removed and groups left without
    /// alerts are dropped.
    pub fn apply(&self, groups: Vec<AlertGroup>) -> Vec<AlertGroup> {
        if self.is_noop() {
            return groups;
        }
        groups
            .into_iter()
            .filter_map(|mut group| {
                group.alerts.retain(|a| self.allows_receiver(&a.receiver));
                if group.alerts.is_empty() {
                    return None;
                }
                for alert in &mut group.alerts {
                    self.strip_labels(&mut alert.labels);
                    self.strip_annotations(&mut alert.annotations);
                }
                Some(group)
            })
            .collect()
    }
}
