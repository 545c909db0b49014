use crate::application::dto::{RenderRequest, RenderResponse, SnapshotInput};
use crate::application::read_models::AlertRowBuilder;
use crate::ports::outbound::{ProgressReporter, SnapshotReader};
use crate::shared::Result;

/// RenderAlertListUseCase - derives alert rows for a whole snapshot
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderAlertListUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> RenderAlertListUseCase<SR, PR>
where
    SR: SnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    /// Executes the render use case
    ///
    /// Alerts without any upstream source produce no row; they are counted
    /// and reported as a warning instead of failing the render.
    ///
    /// # Errors
    /// Returns an error only if the snapshot cannot be read
    pub fn execute(&self, request: RenderRequest) -> Result<RenderResponse> {
        let snapshot = match request.input {
            SnapshotInput::File(path) => {
                self.progress_reporter.report(&format!(
                    "📖 Loading alert snapshot from: {}",
                    path.display()
                ));
                self.snapshot_reader.read_snapshot(&path)?
            }
            SnapshotInput::Loaded(snapshot) => snapshot,
        };

        self.progress_reporter.report(&format!(
            "✅ Loaded {} group(s) with {} alert(s)",
            snapshot.groups.len(),
            snapshot.alert_count()
        ));

        let mut snapshot = snapshot;
        if !request.policy.is_noop() {
            let before = snapshot.alert_count();
            snapshot.groups = request.policy.apply(std::mem::take(&mut snapshot.groups));
            let hidden = before - snapshot.alert_count();
            if hidden > 0 {
                self.progress_reporter.report(&format!(
                    "🚫 Hidden {} alert(s) based on receiver filters",
                    hidden
                ));
            }
        }

        let view = AlertRowBuilder::build_list(&snapshot, &request.options);

        if view.skipped_alerts > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} alert(s) have no upstream source and were not rendered",
                view.skipped_alerts
            ));
        }

        self.progress_reporter.report(&format!(
            "📊 Rendered {} row(s) in {} group(s)",
            view.row_count(),
            view.groups.len()
        ));

        Ok(RenderResponse::new(view, snapshot))
    }
}
