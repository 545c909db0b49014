use crate::application::read_models::AlertListView;
use crate::shared::Result;

/// AlertListFormatter port for rendering the alert list to text
pub trait AlertListFormatter {
    /// Formats every group and row of `view`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &AlertListView) -> Result<String>;
}
