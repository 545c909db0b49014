pub mod alert;
pub mod alert_state;
pub mod annotation;
pub mod colors;
pub mod group;
pub mod labels;
pub mod sensu_event;
pub mod snapshot;
pub mod upstream;

pub use alert::Alert;
pub use alert_state::AlertState;
pub use annotation::Annotation;
pub use colors::{LabelColors, LabelsColorMap, Rgba};
pub use group::{AlertGroup, SharedMetadata};
pub use labels::Labels;
pub use sensu_event::{SensuCheck, SensuEntity, SensuEvent, SensuObjectMeta};
pub use snapshot::AlertsSnapshot;
pub use upstream::{Upstream, UpstreamKind, UpstreamSource};
