use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Rows were rendered and presented
    Success = 0,
    /// Application error (snapshot not found, upstream failure, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for alert row rendering.
#[derive(Debug, Error)]
pub enum AlertViewError {
    #[error("Alert snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse alert snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be a JSON object with a \"groups\" array")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Cannot register upstream '{name}': {reason}")]
    UpstreamRegistration { name: String, reason: String },

    #[error("Request to upstream '{name}' failed\nDetails: {details}\n\n💡 Hint: Check that the upstream is reachable and the URI is correct")]
    UpstreamRequest { name: String, details: String },

    #[error("Failed to authenticate with upstream '{name}'\nDetails: {details}\n\n💡 Hint: Verify the configured username and password")]
    AuthenticationFailed { name: String, details: String },

    #[error("No alert source configured\n\n💡 Hint: Pass a snapshot with --input or configure sensu upstreams in {config_file}")]
    NoAlertSource { config_file: String },
}
