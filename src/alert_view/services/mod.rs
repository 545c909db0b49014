mod alert_dedup;
mod inhibition;
mod sensu_events;
mod silence_aggregator;
mod upstream_resolver;

pub use alert_dedup::AlertDeduplicator;
pub use inhibition::{InhibitionIndicator, INHIBITED_TOOLTIP};
pub use sensu_events::{SensuEventConverter, SENSU_RECEIVER};
pub use silence_aggregator::{ClusterSilences, SilenceAggregator, UnseenSilences};
pub use upstream_resolver::resolve_upstream;
