/// Network adapters for Sensu upstreams
mod sensu_client;
mod upstream_registry;

pub use sensu_client::{sanitize_uri, SensuApiClient, SensuClientOptions, DEFAULT_TIMEOUT};
pub use upstream_registry::UpstreamRegistry;
