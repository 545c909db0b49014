use crate::alert_view::domain::{AlertGroup, AlertsSnapshot};
use crate::alert_view::policies::VisibilityPolicy;
use crate::alert_view::services::{AlertDeduplicator, SensuEventConverter};
use crate::ports::outbound::{EventSource, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Upper bound of upstreams pulled at the same time
const MAX_CONCURRENT_PULLS: usize = 4;

/// CollectSensuAlertsUseCase - pulls Sensu events and merges them into a snapshot
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct CollectSensuAlertsUseCase<PR> {
    progress_reporter: PR,
    policy: VisibilityPolicy,
}

impl<PR> CollectSensuAlertsUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR, policy: VisibilityPolicy) -> Self {
        Self {
            progress_reporter,
            policy,
        }
    }

    /// Pulls every upstream concurrently and deduplicates the result
    ///
    /// A failing upstream is reported and skipped.
    ///
    /// # Errors
    /// Returns an error if every upstream failed
    pub async fn execute(&self, sources: &[Arc<dyn EventSource>]) -> Result<AlertsSnapshot> {
        let total = sources.len();
        if total == 0 {
            return Ok(AlertsSnapshot::default());
        }

        self.progress_reporter
            .report(&format!("🔍 Pulling events from {} Sensu upstream(s)...", total));

        let mut pulls = stream::iter(sources.iter().enumerate())
            .map(|(index, source)| async move {
                let pulled = source.fetch_events().await;
                (index, source, pulled)
            })
            .buffer_unordered(MAX_CONCURRENT_PULLS);

        let mut per_upstream: Vec<(usize, Vec<AlertGroup>)> = Vec::with_capacity(total);
        let mut completed = 0;
        let mut failed = 0;
        while let Some((index, source, pulled)) = pulls.next().await {
            completed += 1;
            self.progress_reporter
                .report_progress(completed, total, Some(source.name()));
            match pulled {
                Ok(events) => {
                    let converter = SensuEventConverter::new(source.name(), source.uri());
                    per_upstream.push((index, converter.convert(&events)));
                }
                Err(e) => {
                    failed += 1;
                    self.progress_reporter.report_warning(&format!(
                        "⚠️  Warning: Failed to pull events from '{}': {}",
                        source.name(),
                        e
                    ));
                }
            }
        }

        if failed == total {
            anyhow::bail!(
                "All {} Sensu upstream(s) failed, no alerts could be collected",
                total
            );
        }

        // keep configuration order so merged source lists are stable
        per_upstream.sort_by_key(|(index, _)| *index);
        let per_upstream: Vec<Vec<AlertGroup>> =
            per_upstream.into_iter().map(|(_, groups)| groups).collect();

        let known_labels: Vec<Vec<String>> = per_upstream
            .iter()
            .map(|groups| SensuEventConverter::known_labels(groups))
            .collect();
        let known_labels = AlertDeduplicator::dedup_known_labels(&known_labels);

        let groups = AlertDeduplicator::dedup(per_upstream, &self.policy);
        let snapshot = AlertsSnapshot::new(groups);

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} alert(s) in {} group(s) using {} label name(s) ({} upstream(s) failed)",
            snapshot.alert_count(),
            snapshot.groups.len(),
            known_labels.len(),
            failed
        ));

        Ok(snapshot)
    }
}
