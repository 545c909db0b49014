use crate::alert_view::domain::{
    Alert, AlertGroup, AlertState, Annotation, Labels, SensuEvent, UpstreamSource,
};
use crate::shared::fingerprint::sha256_of;
use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};

/// Receiver assigned to alerts built from Sensu events
pub const SENSU_RECEIVER: &str = "sensu";

/// SensuEventConverter turns Sensu events into alert groups
///
/// One group with a single alert is produced per unhealthy event. The group
/// id is derived from the entity and check identity so the same event pulled
/// from two Sensu instances lands in the same group.
pub struct SensuEventConverter {
    upstream_name: String,
    cluster_id: String,
}

impl SensuEventConverter {
    pub fn new(upstream_name: impl Into<String>, upstream_uri: &str) -> Self {
        Self {
            upstream_name: upstream_name.into(),
            cluster_id: Self::cluster_id(upstream_uri),
        }
    }

    /// Cluster id of a Sensu instance, derived from its URI
    pub fn cluster_id(upstream_uri: &str) -> String {
        sha256_of(&[upstream_uri])
    }

    pub fn convert(&self, events: &[SensuEvent]) -> Vec<AlertGroup> {
        events
            .iter()
            .filter(|event| !event.is_healthy())
            .map(|event| self.convert_event(event))
            .collect()
    }

    /// Sorted label names used by the given groups
    pub fn known_labels(groups: &[AlertGroup]) -> Vec<String> {
        groups
            .iter()
            .flat_map(|g| g.labels.names())
            .map(str::to_string)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    fn convert_event(&self, event: &SensuEvent) -> AlertGroup {
        let entity = &event.entity.metadata;
        let check = &event.check;

        let starts_at_unix = if check.last_ok != 0 {
            check.last_ok
        } else {
            check.issued
        };
        let starts_at = DateTime::<Utc>::from_timestamp(starts_at_unix, 0);

        let state = if check.silenced.is_empty() {
            AlertState::Active
        } else {
            AlertState::Suppressed
        };

        let labels = Self::event_labels(event);

        let mut annotations = HashMap::new();
        annotations.insert("description".to_string(), check.output.clone());
        annotations.insert(
            "summary".to_string(),
            format!("failing: {}", check.metadata.name),
        );

        let source = UpstreamSource {
            name: self.upstream_name.clone(),
            cluster: self.cluster_id.clone(),
            state: state.clone(),
            starts_at,
            source: String::new(),
            silenced_by: check.silenced.clone(),
            inhibited_by: Vec::new(),
        };

        let mut alert = Alert::new(labels.clone(), state)
            .with_annotations(Annotation::from_map(&annotations))
            .with_receiver(SENSU_RECEIVER)
            .with_sensu(vec![source]);
        alert.starts_at = starts_at;

        let id = sha256_of(&[
            entity.name.as_str(),
            entity.namespace.as_str(),
            check.metadata.name.as_str(),
            check.metadata.namespace.as_str(),
        ]);

        let mut group = AlertGroup::new(id, labels);
        group.receiver = SENSU_RECEIVER.to_string();
        group.alerts.push(alert);
        group
    }

    /// Entity labels (sorted by name) followed by the identity labels
    fn event_labels(event: &SensuEvent) -> Labels {
        let mut entity_labels: Vec<(&String, &String)> = event
            .entity
            .metadata
            .labels
            .iter()
            .flatten()
            .collect();
        entity_labels.sort();

        let mut labels: Labels = entity_labels
            .into_iter()
            .map(|(n, v)| (n.clone(), v.clone()))
            .collect();
        labels.insert("check.name", event.check.metadata.name.clone());
        labels.insert("namespace", event.entity.metadata.namespace.clone());
        labels.insert("entity.name", event.entity.metadata.name.clone());
        labels
    }
}
