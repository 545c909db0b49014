//! Builder turning one alert of a group into its row view
//!
//! The builder is the only place that knows the order of row elements.

use super::alert_row_view::{AlertGroupView, AlertListView, AlertRowView, RowOptions, ROW_BASE_CLASSES};
use super::row_element::{RowElement, StaticLabels};
use crate::alert_view::domain::{Alert, AlertGroup, AlertsSnapshot};
use crate::alert_view::services::{
    resolve_upstream, InhibitionIndicator, SilenceAggregator, INHIBITED_TOOLTIP,
};

pub struct AlertRowBuilder;

impl AlertRowBuilder {
    /// Builds the row for `alert`, which must belong to `group`
    ///
    /// # Returns
    /// `None` when the alert has neither alertmanager nor sensu sources;
    /// such an alert renders nothing.
    pub fn build(group: &AlertGroup, alert: &Alert, options: &RowOptions) -> Option<AlertRowView> {
        let upstream = resolve_upstream(alert)?;
        let sources = upstream.sources();
        let silences = SilenceAggregator::aggregate(sources, &group.shared);

        let mut elements = Vec::new();

        elements.extend(
            alert
                .annotations
                .iter()
                .filter(|a| !a.is_link)
                .map(|a| RowElement::NonLinkAnnotation {
                    name: a.name.clone(),
                    value: a.value.clone(),
                    visible: a.visible,
                }),
        );

        let fingerprint = alert.fingerprint();
        elements.push(RowElement::Menu {
            group_id: group.id.clone(),
            fingerprint: fingerprint.clone(),
        });

        if InhibitionIndicator::is_inhibited(sources) {
            elements.push(RowElement::InhibitedIndicator {
                tooltip: INHIBITED_TOOLTIP.to_string(),
            });
        }

        elements.extend(
            alert
                .labels
                .iter()
                .map(|(name, value)| RowElement::filtering_label(name, value)),
        );

        if options.show_alertmanagers {
            elements.extend(
                sources
                    .iter()
                    .map(|us| RowElement::filtering_label(StaticLabels::ALERTMANAGER, &us.name)),
            );
        }

        if options.show_receiver {
            elements.push(RowElement::filtering_label(
                StaticLabels::RECEIVER,
                &alert.receiver,
            ));
        }

        elements.extend(
            alert
                .annotations
                .iter()
                .filter(|a| a.is_link)
                .map(|a| RowElement::LinkAnnotation {
                    name: a.name.clone(),
                    value: a.value.clone(),
                }),
        );

        elements.extend(silences.pairs().map(|(cluster, id)| RowElement::Silence {
            cluster: cluster.to_string(),
            silence_id: id.to_string(),
        }));

        let mut class_names: Vec<String> = ROW_BASE_CLASSES.iter().map(|c| c.to_string()).collect();
        class_names.push(alert.state.border_class().to_string());

        Some(AlertRowView {
            fingerprint,
            state: alert.state.as_str().to_string(),
            class_names,
            elements,
        })
    }

    /// Builds rows for every alert of every group in the snapshot
    ///
    /// Alerts that cannot be rendered are counted in `skipped_alerts`.
    pub fn build_list(snapshot: &AlertsSnapshot, options: &RowOptions) -> AlertListView {
        let mut view = AlertListView::default();
        for group in &snapshot.groups {
            let mut rows = Vec::with_capacity(group.alerts.len());
            for alert in &group.alerts {
                match Self::build(group, alert, options) {
                    Some(row) => rows.push(row),
                    None => view.skipped_alerts += 1,
                }
            }
            view.groups.push(AlertGroupView {
                id: group.id.clone(),
                receiver: group.receiver.clone(),
                labels: group
                    .labels
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                rows,
            });
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_view::domain::{AlertState, Annotation, Labels, UpstreamSource};

    fn group_with(alert: Alert) -> AlertGroup {
        let mut group = AlertGroup::new("g1", Labels::new());
        group.receiver = "ops".to_string();
        group.alerts.push(alert);
        group
    }

    fn labels() -> Labels {
        [("alertname", "HostDown"), ("instance", "web1")]
            .into_iter()
            .collect()
    }

    fn kinds(row: &AlertRowView) -> Vec<&'static str> {
        row.elements
            .iter()
            .map(|e| match e {
                RowElement::NonLinkAnnotation { .. } => "annotation",
                RowElement::Menu { .. } => "menu",
                RowElement::InhibitedIndicator { .. } => "inhibited",
                RowElement::FilteringLabel { .. } => "label",
                RowElement::LinkAnnotation { .. } => "link",
                RowElement::Silence { .. } => "silence",
            })
            .collect()
    }

    #[test]
    fn test_no_upstream_renders_nothing() {
        let alert = Alert::new(labels(), AlertState::Active);
        let group = group_with(alert.clone());
        assert!(AlertRowBuilder::build(&group, &alert, &RowOptions::default()).is_none());
    }

    #[test]
    fn test_element_order() {
        let alert = Alert::new(labels(), AlertState::Suppressed)
            .with_receiver("ops")
            .with_annotations(vec![
                Annotation::new("runbook", "https://wiki/runbook"),
                Annotation::new("summary", "host is down"),
            ])
            .with_alertmanager(vec![UpstreamSource::new("am1", "prod")
                .with_silenced_by(["s1"])
                .with_inhibited_by(["other"])]);
        let group = group_with(alert.clone());
        let options = RowOptions {
            show_alertmanagers: true,
            show_receiver: true,
        };

        let row = AlertRowBuilder::build(&group, &alert, &options).unwrap();
        assert_eq!(
            kinds(&row),
            vec![
                "annotation",
                "menu",
                "inhibited",
                "label",
                "label",
                "label",
                "label",
                "link",
                "silence"
            ]
        );
        let labels: Vec<(&str, &str)> = row.labels().collect();
        assert_eq!(
            labels,
            vec![
                ("alertname", "HostDown"),
                ("instance", "web1"),
                ("@alertmanager", "am1"),
                ("@receiver", "ops"),
            ]
        );
        assert!(row.class_names.contains(&"border-success".to_string()));
    }

    #[test]
    fn test_sensu_alert_with_flags_off() {
        let alert = Alert::new(labels(), AlertState::Active)
            .with_sensu(vec![UpstreamSource::new("sensu-eu", "abc")]);
        let group = group_with(alert.clone());

        let row = AlertRowBuilder::build(&group, &alert, &RowOptions::default()).unwrap();
        assert_eq!(kinds(&row), vec!["menu", "label", "label"]);
        assert!(!row.is_inhibited());
        assert_eq!(row.class_names.last().unwrap(), "border-danger");
    }

    #[test]
    fn test_alertmanager_label_per_source() {
        let alert = Alert::new(Labels::new(), AlertState::Active).with_alertmanager(vec![
            UpstreamSource::new("am1", "prod"),
            UpstreamSource::new("am2", "prod"),
        ]);
        let group = group_with(alert.clone());
        let options = RowOptions {
            show_alertmanagers: true,
            show_receiver: false,
        };

        let row = AlertRowBuilder::build(&group, &alert, &options).unwrap();
        let values: Vec<&str> = row.labels().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["am1", "am2"]);
    }

    #[test]
    fn test_group_silences_are_not_repeated() {
        let alert = Alert::new(labels(), AlertState::Suppressed).with_alertmanager(vec![
            UpstreamSource::new("am1", "prod").with_silenced_by(["s1", "s2", "s2"]),
        ]);
        let mut group = group_with(alert.clone());
        group
            .shared
            .silences
            .insert("prod".to_string(), vec!["s1".to_string()]);

        let row = AlertRowBuilder::build(&group, &alert, &RowOptions::default()).unwrap();
        let silences: Vec<(&str, &str)> = row.silences().collect();
        assert_eq!(silences, vec![("prod", "s2")]);
    }

    #[test]
    fn test_unknown_state_gets_default_border() {
        let alert = Alert::new(labels(), AlertState::Other("weird".to_string()))
            .with_alertmanager(vec![]);
        let group = group_with(alert.clone());
        let row = AlertRowBuilder::build(&group, &alert, &RowOptions::default()).unwrap();
        assert_eq!(row.class_names.last().unwrap(), "border-default");
        assert_eq!(row.state, "weird");
    }

    #[test]
    fn test_build_list_counts_skipped_alerts() {
        let renderable = Alert::new(labels(), AlertState::Active).with_alertmanager(vec![]);
        let orphan = Alert::new(labels(), AlertState::Active);
        let mut group = group_with(renderable);
        group.alerts.push(orphan);

        let view = AlertRowBuilder::build_list(
            &AlertsSnapshot::new(vec![group]),
            &RowOptions::default(),
        );
        assert_eq!(view.row_count(), 1);
        assert_eq!(view.skipped_alerts, 1);
    }
}
