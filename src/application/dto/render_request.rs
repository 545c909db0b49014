use crate::alert_view::domain::AlertsSnapshot;
use crate::alert_view::policies::VisibilityPolicy;
use crate::application::read_models::RowOptions;
use std::path::PathBuf;

/// Where the use case gets its alerts from
#[derive(Debug, Clone)]
pub enum SnapshotInput {
    /// Read through the SnapshotReader port
    File(PathBuf),
    /// Already collected, e.g. pulled from Sensu upstreams
    Loaded(AlertsSnapshot),
}

/// RenderRequest - Internal request DTO for the render use case
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub input: SnapshotInput,
    pub options: RowOptions,
    /// Applied to snapshot groups before rows are built
    pub policy: VisibilityPolicy,
}

impl RenderRequest {
    pub fn new(input: SnapshotInput, options: RowOptions, policy: VisibilityPolicy) -> Self {
        Self {
            input,
            options,
            policy,
        }
    }
}
