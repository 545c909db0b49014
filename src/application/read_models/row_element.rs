//! Elements making up one rendered alert row.
use serde::Serialize;

/// Label names used for labels that are not real alert labels
pub struct StaticLabels;

impl StaticLabels {
    pub const ALERTMANAGER: &'static str = "@alertmanager";
    pub const RECEIVER: &'static str = "@receiver";
}

/// One child element of an alert row, in render order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowElement {
    /// Annotation rendered as text at the top of the row
    NonLinkAnnotation {
        name: String,
        value: String,
        visible: bool,
    },
    /// Per-alert menu (silence, copy labels, ...)
    Menu { group_id: String, fingerprint: String },
    /// Muted icon shown when another alert inhibits this one
    InhibitedIndicator { tooltip: String },
    /// Clickable label that adds a filter for `name=value`
    FilteringLabel { name: String, value: String },
    /// Annotation rendered as a link after all labels
    LinkAnnotation { name: String, value: String },
    /// Reference to a silence not already shown for the group
    Silence { cluster: String, silence_id: String },
}

impl RowElement {
    pub fn filtering_label(name: impl Into<String>, value: impl Into<String>) -> Self {
        RowElement::FilteringLabel {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_label(&self) -> bool {
        matches!(self, RowElement::FilteringLabel { .. })
    }
}
