use crate::alert_view::domain::UpstreamSource;

pub const INHIBITED_TOOLTIP: &str = "This alert is inhibited by other alerts";

/// Decides whether the muted indicator is shown for an alert
pub struct InhibitionIndicator;

impl InhibitionIndicator {
    /// Number of inhibiting alerts summed over every upstream source
    pub fn total(sources: &[UpstreamSource]) -> usize {
        sources.iter().map(|us| us.inhibited_by.len()).sum()
    }

    pub fn is_inhibited(sources: &[UpstreamSource]) -> bool {
        Self::total(sources) > 0
    }
}
