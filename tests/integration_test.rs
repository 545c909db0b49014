mod test_utilities;

use alertrow::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use test_utilities::mocks::*;

fn render(reader: MockSnapshotReader, options: RowOptions) -> (RenderResponse, MockProgressReporter) {
    let reporter = MockProgressReporter::new();
    let use_case = RenderAlertListUseCase::new(reader, reporter.clone());
    let request = RenderRequest::new(
        SnapshotInput::File(PathBuf::from("alerts.json")),
        options,
        VisibilityPolicy::default(),
    );
    (use_case.execute(request).unwrap(), reporter)
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
fn test_render_fixture_snapshot() {
    let (response, reporter) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    let view = &response.view;
    assert_eq!(view.groups.len(), 3);
    assert_eq!(view.row_count(), 4);
    assert_eq!(view.skipped_alerts, 1);

    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Loading alert snapshot from: alerts.json")));
    assert_eq!(reporter.warnings().len(), 1);
    assert!(reporter.warnings()[0].contains("1 alert(s) have no upstream source"));
}

#[test]
fn test_row_element_order() {
    let (response, _) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    let row = &response.view.groups[0].rows[0];
    assert_eq!(
        kinds(row),
        vec!["annotation", "menu", "label", "label", "link", "silence"]
    );
    assert_eq!(row.state, "suppressed");
    assert!(row.class_names.contains(&"border-success".to_string()));
}

#[test]
fn test_group_silences_are_not_repeated_on_rows() {
    let (response, _) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    // s1 is shown on the group, s2 is listed twice, s9 comes from a later
    // instance of the same cluster
    let row = &response.view.groups[0].rows[0];
    let silences: Vec<(&str, &str)> = row.silences().collect();
    assert_eq!(silences, vec![("prod", "s2")]);
}

#[test]
fn test_inhibited_row() {
    let (response, _) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    let rows = &response.view.groups[0].rows;
    assert!(!rows[0].is_inhibited());
    assert!(rows[1].is_inhibited());
    assert_eq!(kinds(&rows[1]), vec!["menu", "inhibited", "label", "label"]);
}

#[test]
fn test_sensu_row() {
    let (response, _) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    let group = &response.view.groups[1];
    assert_eq!(group.receiver, "sensu");
    let labels: Vec<(&str, &str)> = group.rows[0].labels().collect();
    assert_eq!(
        labels,
        vec![("check.name", "check-disk"), ("entity.name", "db1")]
    );
    assert_eq!(group.rows[0].silences().count(), 0);
}

#[test]
fn test_static_labels_follow_alert_labels() {
    let options = RowOptions {
        show_alertmanagers: true,
        show_receiver: true,
    };
    let (response, _) = render(MockSnapshotReader::from_fixture(), options);

    let labels: Vec<(&str, &str)> = response.view.groups[0].rows[0].labels().collect();
    assert_eq!(
        labels,
        vec![
            ("alertname", "HostDown"),
            ("instance", "web1"),
            ("@alertmanager", "am1"),
            ("@alertmanager", "am2"),
            ("@receiver", "ops"),
        ]
    );
}

#[test]
fn test_receiver_filter_hides_groups() {
    let reporter = MockProgressReporter::new();
    let use_case = RenderAlertListUseCase::new(MockSnapshotReader::from_fixture(), reporter.clone());
    let policy = VisibilityPolicy {
        receivers: KeepStripFilter::new(vec![], vec!["null".to_string()]),
        ..Default::default()
    };
    let request = RenderRequest::new(
        SnapshotInput::File(PathBuf::from("alerts.json")),
        RowOptions::default(),
        policy,
    );

    let response = use_case.execute(request).unwrap();
    let ids: Vec<&str> = response.view.groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "g2"]);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Hidden 1 alert(s)")));
}

#[test]
fn test_render_reader_failure() {
    let reporter = MockProgressReporter::new();
    let use_case = RenderAlertListUseCase::new(MockSnapshotReader::with_failure(), reporter);
    let request = RenderRequest::new(
        SnapshotInput::File(PathBuf::from("alerts.json")),
        RowOptions::default(),
        VisibilityPolicy::default(),
    );

    let result = use_case.execute(request);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock snapshot read failure"));
}

#[test]
fn test_formatters_render_fixture() {
    let (response, _) = render(MockSnapshotReader::from_fixture(), RowOptions::default());

    let markdown = MarkdownFormatter::new().format(&response.view).unwrap();
    assert!(markdown.contains("4 row(s) in 3 group(s)"));
    assert!(markdown.contains(
        "| suppressed | **summary**: host is down | `alertname=HostDown` `instance=web1` | [runbook](https://wiki.example.com/hostdown) | prod/s2 |"
    ));
    assert!(markdown.contains("| active 🔇 |"));

    let json = JsonFormatter::new().format(&response.view).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["metadata"]["rowCount"], 4);
    assert_eq!(parsed["skippedAlerts"], 1);
    assert_eq!(parsed["groups"][0]["rows"][0]["elements"][1]["kind"], "menu");
}

#[tokio::test]
async fn test_collect_and_render_sensu_events() {
    let eu = MockEventSource::new(
        "sensu-eu",
        vec![
            MockEventSource::event("web1", "check-disk", 2, &[]),
            MockEventSource::event("web2", "check-disk", 0, &[]),
        ],
    );
    let us = MockEventSource::new(
        "sensu-us",
        vec![MockEventSource::event("web1", "check-disk", 2, &["web1:check-disk"])],
    );
    let sources = vec![eu.into_source(), us.into_source()];

    let reporter = MockProgressReporter::new();
    let collect = CollectSensuAlertsUseCase::new(reporter.clone(), VisibilityPolicy::default());
    let snapshot = collect.execute(&sources).await.unwrap();

    // the healthy event is dropped, the same failing check from both
    // instances merges into one alert
    assert_eq!(snapshot.groups.len(), 1);
    assert_eq!(snapshot.alert_count(), 1);
    let alert = &snapshot.groups[0].alerts[0];
    assert_eq!(alert.state, AlertState::Active);
    assert_eq!(alert.sensu.as_ref().unwrap().len(), 2);

    let render = RenderAlertListUseCase::new(MockSnapshotReader::with_failure(), reporter.clone());
    let response = render
        .execute(RenderRequest::new(
            SnapshotInput::Loaded(snapshot),
            RowOptions {
                show_alertmanagers: true,
                show_receiver: false,
            },
            VisibilityPolicy::default(),
        ))
        .unwrap();

    let row = &response.view.groups[0].rows[0];
    let upstreams: Vec<&str> = row
        .labels()
        .filter(|(name, _)| *name == "@alertmanager")
        .map(|(_, value)| value)
        .collect();
    assert_eq!(upstreams, vec!["sensu-eu", "sensu-us"]);
    let silences: Vec<(&str, &str)> = row.silences().collect();
    assert_eq!(silences.len(), 1);
    assert_eq!(silences[0].1, "web1:check-disk");
}

#[tokio::test]
async fn test_collect_skips_failing_upstream() {
    let healthy = MockEventSource::new(
        "sensu-eu",
        vec![MockEventSource::event("web1", "check-disk", 2, &[])],
    );
    let failing = MockEventSource::with_failure("sensu-us");
    let calls = failing.calls.clone();

    let reporter = MockProgressReporter::new();
    let collect = CollectSensuAlertsUseCase::new(reporter.clone(), VisibilityPolicy::default());
    let snapshot = collect
        .execute(&[healthy.into_source(), failing.into_source()])
        .await
        .unwrap();

    assert_eq!(snapshot.alert_count(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("sensu-us"));
}

#[tokio::test]
async fn test_collect_fails_when_every_upstream_fails() {
    let reporter = MockProgressReporter::new();
    let collect = CollectSensuAlertsUseCase::new(reporter, VisibilityPolicy::default());
    let result = collect
        .execute(&[MockEventSource::with_failure("sensu-eu").into_source()])
        .await;

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("All 1 Sensu upstream(s) failed"));
}

#[test]
fn test_store_drives_presenter() {
    let store = AlertStore::new(AlertsSnapshot::default());
    let callbacks = MockRowCallbacks::new();
    let presenter = Arc::new(AlertListPresenter::new(RowOptions::default(), callbacks.clone()));
    let id = store.subscribe(presenter.clone());

    assert!(presenter.current_view().is_none());

    let version = store.replace(MockSnapshotReader::from_fixture().snapshot);
    assert_eq!(presenter.current_version(), Some(version));
    assert_eq!(presenter.current_view().unwrap().row_count(), 4);

    presenter.set_menu_open(true);
    assert_eq!(callbacks.get_calls(), vec!["after_update", "set_menu_open(true)"]);

    assert!(store.unsubscribe(id));
    store.replace(AlertsSnapshot::default());
    assert_eq!(presenter.current_version(), Some(version));
    assert_eq!(presenter.current_view().unwrap().row_count(), 4);
}

#[test]
fn test_history_label_classes() {
    let snapshot = MockSnapshotReader::from_fixture().snapshot;

    let colored = HistoryLabel::new("alertname", "=", "HostDown");
    assert_eq!(
        colored.class_names(&snapshot.colors),
        vec!["components-label", "components-label-dark"]
    );
    assert_eq!(colored.text(), "alertname=HostDown");
}
