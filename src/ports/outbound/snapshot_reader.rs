use crate::alert_view::domain::AlertsSnapshot;
use crate::shared::Result;
use std::path::Path;

/// SnapshotReader port for loading alert snapshots
///
/// A snapshot is the already-fetched alert state: groups plus label colors.
pub trait SnapshotReader {
    /// Reads and parses the snapshot stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The content is not a valid snapshot document
    fn read_snapshot(&self, path: &Path) -> Result<AlertsSnapshot>;
}
