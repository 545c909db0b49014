//! View of a single alert row and of the whole alert list.
use super::row_element::RowElement;
use serde::Serialize;

/// Base classes every alert row carries, before the state border class
pub const ROW_BASE_CLASSES: [&str; 6] = [
    "components-grid-alertgrid-alertgroup-alert",
    "list-group-item bg-transparent",
    "pl-1 pr-0 py-0",
    "my-1",
    "rounded-0",
    "border-left-1 border-right-0 border-top-0 border-bottom-0",
];

/// Flags controlling optional row content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOptions {
    /// Add one `@alertmanager` label per upstream source
    pub show_alertmanagers: bool,
    /// Add an `@receiver` label
    pub show_receiver: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertRowView {
    pub fingerprint: String,
    pub state: String,
    pub class_names: Vec<String>,
    pub elements: Vec<RowElement>,
}

impl AlertRowView {
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements.iter().filter_map(|e| match e {
            RowElement::FilteringLabel { name, value } => Some((name.as_str(), value.as_str())),
            _ => None,
        })
    }

    pub fn silences(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements.iter().filter_map(|e| match e {
            RowElement::Silence {
                cluster,
                silence_id,
            } => Some((cluster.as_str(), silence_id.as_str())),
            _ => None,
        })
    }

    pub fn is_inhibited(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, RowElement::InhibitedIndicator { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertGroupView {
    pub id: String,
    pub receiver: String,
    pub labels: Vec<(String, String)>,
    pub rows: Vec<AlertRowView>,
}

/// Rendered alert list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlertListView {
    pub groups: Vec<AlertGroupView>,
    /// Alerts without any upstream source, which render nothing
    pub skipped_alerts: usize,
}

impl AlertListView {
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}
