/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod render_request;
mod render_response;

pub use output_format::OutputFormat;
pub use render_request::{RenderRequest, SnapshotInput};
pub use render_response::RenderResponse;
