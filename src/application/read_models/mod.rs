//! Read models for CQRS-lite pattern
//!
//! View-optimized structs derived from alert groups. Nothing in here is
//! cached between derivation passes.

pub mod alert_row_builder;
pub mod alert_row_view;
pub mod history_label;
pub mod row_element;

pub use alert_row_builder::AlertRowBuilder;
pub use alert_row_view::{AlertGroupView, AlertListView, AlertRowView, RowOptions};
pub use history_label::HistoryLabel;
pub use row_element::{RowElement, StaticLabels};
