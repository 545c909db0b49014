use crate::alert_view::domain::AlertsSnapshot;
use crate::ports::outbound::SnapshotReader;
use crate::shared::error::AlertViewError;
use crate::shared::security::{ensure_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading alert snapshots from disk
///
/// Snapshots are JSON documents with a `groups` array and an optional
/// `colors` map, as exported by the dashboard backend.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the symlink, file type and size checks
    fn safe_read_file(&self, path: &Path, description: &str) -> Result<String> {
        ensure_readable_file(path, description, MAX_FILE_SIZE)?;
        fs::read_to_string(path).map_err(|e| {
            AlertViewError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotReader for FileSystemReader {
    fn read_snapshot(&self, path: &Path) -> Result<AlertsSnapshot> {
        if !path.exists() {
            return Err(AlertViewError::SnapshotNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "File \"{}\" does not exist.\n   \
                     Export the current alert state to a JSON file and pass it with --input.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path, "alert snapshot")?;

        serde_json::from_str(&content).map_err(|e| {
            AlertViewError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
