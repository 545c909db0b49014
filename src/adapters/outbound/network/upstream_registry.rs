use super::sensu_client::{sanitize_uri, SensuApiClient};
use crate::ports::outbound::EventSource;
use crate::shared::error::AlertViewError;
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// UpstreamRegistry keeps the configured Sensu upstreams, keyed by name
///
/// Names and URIs must both be unique; two names pointing at the same
/// Sensu instance would report every event twice.
#[derive(Default)]
pub struct UpstreamRegistry {
    upstreams: DashMap<String, Arc<SensuApiClient>>,
}

impl UpstreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an upstream
    ///
    /// # Errors
    /// Returns an error if an upstream with the same name or URI exists
    pub fn register(&self, client: SensuApiClient) -> Result<()> {
        let name = client.name().to_string();
        if self.upstreams.contains_key(&name) {
            return Err(AlertViewError::UpstreamRegistration {
                name: name.clone(),
                reason: format!("sensu upstream '{}' already exists", name),
            }
            .into());
        }

        if let Some(existing) = self
            .upstreams
            .iter()
            .find(|entry| entry.value().uri() == client.uri())
        {
            return Err(AlertViewError::UpstreamRegistration {
                name,
                reason: format!(
                    "sensu upstream '{}' already collects from '{}'",
                    existing.key(),
                    sanitize_uri(existing.value().uri())
                ),
            }
            .into());
        }

        self.upstreams.insert(name, Arc::new(client));
        Ok(())
    }

    /// Registered upstreams sorted by name
    pub fn upstreams(&self) -> Vec<Arc<SensuApiClient>> {
        let mut upstreams: Vec<Arc<SensuApiClient>> = self
            .upstreams
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        upstreams.sort_by(|a, b| a.name().cmp(b.name()));
        upstreams
    }

    /// Registered upstreams as event sources, sorted by name
    pub fn event_sources(&self) -> Vec<Arc<dyn EventSource>> {
        self.upstreams()
            .into_iter()
            .map(|client| client as Arc<dyn EventSource>)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.upstreams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upstreams.is_empty()
    }
}
