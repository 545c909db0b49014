//! alertrow - alert row view models for grouped alert dashboards
//!
//! This library derives, for every alert of an alert group, the row a
//! dashboard draws: which upstream reported it, which silences apply to it
//! that the group does not already show, whether another alert inhibits it,
//! and the ordered list of annotations, labels and silence references.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_view`): Alert data model and pure derivation services
//! - **Application Layer** (`application`): Read models, the alert store and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, console, formatter and Sensu implementations
//! - **Shared** (`shared`): Error types, fingerprints and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use alertrow::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RenderAlertListUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = RenderRequest::new(
//!     SnapshotInput::File(PathBuf::from("alerts.json")),
//!     RowOptions::default(),
//!     VisibilityPolicy::default(),
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format(&response.view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod alert_view;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        SensuApiClient, SensuClientOptions, UpstreamRegistry,
    };
    pub use crate::alert_view::domain::{
        Alert, AlertGroup, AlertState, AlertsSnapshot, Annotation, Labels, SharedMetadata,
        Upstream, UpstreamSource,
    };
    pub use crate::alert_view::policies::{KeepStripFilter, VisibilityPolicy};
    pub use crate::alert_view::services::{
        resolve_upstream, AlertDeduplicator, InhibitionIndicator, SilenceAggregator,
    };
    pub use crate::application::dto::{OutputFormat, RenderRequest, RenderResponse, SnapshotInput};
    pub use crate::application::read_models::{
        AlertListView, AlertRowBuilder, AlertRowView, HistoryLabel, RowElement, RowOptions,
    };
    pub use crate::application::store::{AlertListPresenter, AlertStore, SubscriptionId};
    pub use crate::application::use_cases::{CollectSensuAlertsUseCase, RenderAlertListUseCase};
    pub use crate::ports::outbound::{
        AlertListFormatter, EventSource, OutputPresenter, ProgressReporter, RowCallbacks,
        SnapshotReader, StoreSubscriber,
    };
    pub use crate::shared::Result;
}
