/// Shared utilities used across all layers
pub mod error;
pub mod fingerprint;
pub mod result;
pub mod security;

pub use result::Result;
