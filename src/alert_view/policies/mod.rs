mod visibility;

pub use visibility::{KeepStripFilter, VisibilityPolicy};
