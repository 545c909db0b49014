/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod event_source;
pub mod list_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod row_callbacks;
pub mod snapshot_reader;
pub mod store_subscriber;

pub use event_source::EventSource;
pub use list_formatter::AlertListFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use row_callbacks::RowCallbacks;
pub use snapshot_reader::SnapshotReader;
pub use store_subscriber::StoreSubscriber;
