use crate::alert_view::domain::{SharedMetadata, UpstreamSource};
use std::collections::HashSet;

/// Silences of one cluster that still need to be shown on the alert row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSilences<'a> {
    pub cluster: &'a str,
    /// First upstream source seen for this cluster
    pub reference: &'a UpstreamSource,
    /// Deduplicated silence ids, in first-occurrence order
    pub silences: Vec<&'a str>,
}

/// Per-cluster silences not already displayed at group level
///
/// Entries are kept in the order their cluster was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnseenSilences<'a> {
    entries: Vec<ClusterSilences<'a>>,
}

impl<'a> UnseenSilences<'a> {
    pub fn get(&self, cluster: &str) -> Option<&ClusterSilences<'a>> {
        self.entries.iter().find(|e| e.cluster == cluster)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClusterSilences<'a>> {
        self.entries.iter()
    }

    /// One `(cluster, silence id)` pair per silence reference to render
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries
            .iter()
            .flat_map(|e| e.silences.iter().map(move |id| (e.cluster, *id)))
    }

    /// Number of clusters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds [`UnseenSilences`] for an alert
pub struct SilenceAggregator;

impl SilenceAggregator {
    /// Aggregates silences of `sources` that are not in `shared.silences`
    ///
    /// Only the first source of each cluster is considered. Later sources
    /// reporting the same cluster contribute nothing, even if their
    /// `silenced_by` differs.
    pub fn aggregate<'a>(
        sources: &'a [UpstreamSource],
        shared: &SharedMetadata,
    ) -> UnseenSilences<'a> {
        let mut seen_clusters: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();

        for us in sources {
            if !seen_clusters.insert(us.cluster.as_str()) {
                continue;
            }

            let already_shown = shared.silences_for(&us.cluster);
            let mut unique: HashSet<&str> = HashSet::new();
            let silences = us
                .silenced_by
                .iter()
                .map(String::as_str)
                .filter(|id| !already_shown.iter().any(|shown| shown == id))
                .filter(|id| unique.insert(*id))
                .collect();

            entries.push(ClusterSilences {
                cluster: us.cluster.as_str(),
                reference: us,
                silences,
            });
        }

        UnseenSilences { entries }
    }
}
