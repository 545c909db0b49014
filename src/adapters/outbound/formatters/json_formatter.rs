use crate::application::read_models::{AlertGroupView, AlertListView};
use crate::ports::outbound::AlertListFormatter;
use crate::shared::Result;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    metadata: Metadata,
    groups: &'a [AlertGroupView],
    skipped_alerts: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    generated_at: String,
    tool: String,
    version: String,
    row_count: usize,
}

/// JsonFormatter adapter emitting rows with their ordered elements
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertListFormatter for JsonFormatter {
    fn format(&self, view: &AlertListView) -> Result<String> {
        let document = Document {
            metadata: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                tool: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                row_count: view.row_count(),
            },
            groups: &view.groups,
            skipped_alerts: view.skipped_alerts,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
