use alertrow::alert_view::domain::{SensuCheck, SensuEntity, SensuEvent, SensuObjectMeta};
use alertrow::prelude::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock EventSource serving a fixed list of events
pub struct MockEventSource {
    pub name: String,
    pub uri: String,
    pub events: Vec<SensuEvent>,
    pub should_fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl MockEventSource {
    pub fn new(name: &str, events: Vec<SensuEvent>) -> Self {
        Self {
            name: name.to_string(),
            uri: format!("https://{}.example.com:8080", name),
            events,
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_failure(name: &str) -> Self {
        Self {
            should_fail: true,
            ..Self::new(name, Vec::new())
        }
    }

    pub fn into_source(self) -> Arc<dyn EventSource> {
        Arc::new(self)
    }

    /// An event for `entity` failing `check` with the given status
    pub fn event(entity: &str, check: &str, status: u32, silenced: &[&str]) -> SensuEvent {
        SensuEvent {
            entity: SensuEntity {
                metadata: SensuObjectMeta {
                    name: entity.to_string(),
                    namespace: "default".to_string(),
                    labels: None,
                },
            },
            check: SensuCheck {
                metadata: SensuObjectMeta {
                    name: check.to_string(),
                    namespace: "default".to_string(),
                    labels: None,
                },
                output: format!("{} failed on {}", check, entity),
                status,
                state: "failing".to_string(),
                issued: 1_714_557_600,
                last_ok: 0,
                silenced: silenced.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    async fn fetch_events(&self) -> Result<Vec<SensuEvent>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock upstream failure");
        }
        Ok(self.events.clone())
    }
}
