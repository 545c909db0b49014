use crate::application::read_models::{AlertGroupView, AlertListView, AlertRowView, RowElement};
use crate::ports::outbound::AlertListFormatter;
use crate::shared::Result;

/// Markdown table header for alert rows
const TABLE_HEADER: &str = "| State | Annotations | Labels | Links | Silences |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-------|-------------|--------|-------|----------|\n";

/// Marker placed next to the state of inhibited alerts
const INHIBITED_MARKER: &str = "🔇";

/// MarkdownFormatter adapter rendering one table per alert group
///
/// Within each cell, elements keep the order the row builder produced.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, view: &AlertListView) {
        output.push_str("# Alerts\n\n");
        output.push_str(&format!(
            "{} row(s) in {} group(s)",
            view.row_count(),
            view.groups.len()
        ));
        if view.skipped_alerts > 0 {
            output.push_str(&format!(
                ", {} alert(s) without upstream source not shown",
                view.skipped_alerts
            ));
        }
        output.push_str("\n\n");
    }

    fn render_group(&self, output: &mut String, group: &AlertGroupView) {
        output.push_str(&format!("## {}\n\n", Self::group_title(group)));
        if !group.receiver.is_empty() {
            output.push_str(&format!(
                "Receiver: `{}`\n\n",
                Self::escape_markdown_table_cell(&group.receiver)
            ));
        }
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &group.rows {
            self.render_row(output, row);
        }
        output.push('\n');
    }

    fn group_title(group: &AlertGroupView) -> String {
        if group.labels.is_empty() {
            return Self::escape_markdown_table_cell(&group.id);
        }
        group
            .labels
            .iter()
            .map(|(name, value)| Self::escape_markdown_table_cell(&format!("{}={}", name, value)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_row(&self, output: &mut String, row: &AlertRowView) {
        let mut annotations = Vec::new();
        let mut labels = Vec::new();
        let mut links = Vec::new();
        let mut silences = Vec::new();
        let mut inhibited = false;

        for element in &row.elements {
            match element {
                RowElement::NonLinkAnnotation {
                    name,
                    value,
                    visible,
                } => {
                    if *visible {
                        annotations.push(format!("**{}**: {}", name, value));
                    } else {
                        annotations.push(format!("**{}**", name));
                    }
                }
                RowElement::Menu { .. } => {}
                RowElement::InhibitedIndicator { .. } => inhibited = true,
                RowElement::FilteringLabel { name, value } => {
                    labels.push(format!("`{}={}`", name, value));
                }
                RowElement::LinkAnnotation { name, value } => {
                    links.push(format!("[{}]({})", name, value));
                }
                RowElement::Silence {
                    cluster,
                    silence_id,
                } => silences.push(format!("{}/{}", cluster, silence_id)),
            }
        }

        let state = if inhibited {
            format!("{} {}", row.state, INHIBITED_MARKER)
        } else {
            row.state.clone()
        };

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&state),
            Self::escape_markdown_table_cell(&annotations.join("<br>")),
            Self::escape_markdown_table_cell(&labels.join(" ")),
            Self::escape_markdown_table_cell(&links.join(" ")),
            Self::escape_markdown_table_cell(&silences.join(" ")),
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertListFormatter for MarkdownFormatter {
    fn format(&self, view: &AlertListView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);
        for group in &view.groups {
            self.render_group(&mut output, group);
        }
        Ok(output)
    }
}
