/// Mock implementations for testing
mod mock_event_source;
mod mock_progress_reporter;
mod mock_row_callbacks;
mod mock_snapshot_reader;

pub use mock_event_source::MockEventSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_row_callbacks::MockRowCallbacks;
pub use mock_snapshot_reader::MockSnapshotReader;
