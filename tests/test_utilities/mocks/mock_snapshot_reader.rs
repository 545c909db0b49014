use alertrow::prelude::*;
use std::path::Path;

/// Mock SnapshotReader for testing
pub struct MockSnapshotReader {
    pub snapshot: AlertsSnapshot,
    pub should_fail: bool,
}

impl MockSnapshotReader {
    pub fn new(snapshot: AlertsSnapshot) -> Self {
        Self {
            snapshot,
            should_fail: false,
        }
    }

    /// Reader returning the snapshot stored in `tests/fixtures/snapshot.json`
    pub fn from_fixture() -> Self {
        let content = include_str!("../../fixtures/snapshot.json");
        Self::new(serde_json::from_str(content).unwrap())
    }

    pub fn with_failure() -> Self {
        Self {
            snapshot: AlertsSnapshot::default(),
            should_fail: true,
        }
    }
}

impl SnapshotReader for MockSnapshotReader {
    fn read_snapshot(&self, _path: &Path) -> Result<AlertsSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock snapshot read failure");
        }
        Ok(self.snapshot.clone())
    }
}
