use crate::alert_view::domain::{Alert, AlertGroup, AlertState};
use crate::alert_view::policies::VisibilityPolicy;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// AlertDeduplicator merges alert groups collected from several upstreams
///
/// Pure domain logic: groups sharing an id are merged into one, and alerts
/// sharing a label fingerprint are merged into one alert that carries the
/// upstream sources of every instance that reported it.
pub struct AlertDeduplicator;

impl AlertDeduplicator {
    /// Deduplicates groups pulled from all upstreams
    ///
    /// # Arguments
    /// * `per_upstream` - One list of groups for each upstream, in upstream order
    /// * `policy` - Receiver, label and annotation visibility rules
    ///
    /// # Returns
    /// Merged groups sorted by id; groups left without alerts are dropped
    pub fn dedup(per_upstream: Vec<Vec<AlertGroup>>, policy: &VisibilityPolicy) -> Vec<AlertGroup> {
        let mut unique_groups: BTreeMap<String, Vec<AlertGroup>> = BTreeMap::new();
        for groups in per_upstream {
            for group in groups {
                unique_groups.entry(group.id.clone()).or_default().push(group);
            }
        }

        let mut deduped = Vec::new();
        for (_, group_list) in unique_groups {
            if let Some(group) = Self::merge_group(group_list, policy) {
                deduped.push(group);
            }
        }
        deduped
    }

    fn merge_group(group_list: Vec<AlertGroup>, policy: &VisibilityPolicy) -> Option<AlertGroup> {
        let mut order: Vec<String> = Vec::new();
        let mut alerts: HashMap<String, Alert> = HashMap::new();
        let mut states: HashMap<String, Vec<AlertState>> = HashMap::new();
        let mut template: Option<AlertGroup> = None;

        for mut group in group_list {
            for alert in std::mem::take(&mut group.alerts) {
                // alerts for receivers the user doesn't want to see are dropped
                if !policy.allows_receiver(&alert.receiver) {
                    continue;
                }
                let fingerprint = alert.fingerprint();
                states
                    .entry(fingerprint.clone())
                    .or_default()
                    .push(alert.state.clone());
                match alerts.get_mut(&fingerprint) {
                    Some(existing) => Self::merge_alert(existing, alert),
                    None => {
                        order.push(fingerprint.clone());
                        alerts.insert(fingerprint, alert);
                    }
                }
            }
            template.get_or_insert(group);
        }

        if order.is_empty() {
            return None;
        }

        let mut group = template?;
        for fingerprint in order {
            let Some(mut alert) = alerts.remove(&fingerprint) else {
                continue;
            };
            policy.strip_labels(&mut alert.labels);
            policy.strip_annotations(&mut alert.annotations);
            if let Some(found) = states.get(&fingerprint) {
                alert.state = AlertState::most_important(found);
            }
            if let Some(sources) = alert.upstream_sources_mut() {
                sources.sort_by(|a, b| a.name.cmp(&b.name));
            }
            group.alerts.push(alert);
        }
        Some(group)
    }

    /// Folds a duplicate alert instance into the alert seen first
    fn merge_alert(existing: &mut Alert, incoming: Alert) {
        if let Some(starts_at) = incoming.starts_at {
            if existing.starts_at.map_or(true, |current| starts_at < current) {
                existing.starts_at = Some(starts_at);
            }
        }

        let Alert {
            alertmanager,
            sensu,
            ..
        } = incoming;
        let incoming_sources = alertmanager.or(sensu).unwrap_or_default();
        match existing.upstream_sources_mut() {
            Some(sources) => sources.extend(incoming_sources),
            None => existing.alertmanager = Some(incoming_sources),
        }
    }

    /// Sorted, deduplicated list of label names known to any upstream
    pub fn dedup_known_labels(per_upstream: &[Vec<String>]) -> Vec<String> {
        per_upstream
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}
