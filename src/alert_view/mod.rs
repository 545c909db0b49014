//! Domain layer: alert, group and upstream models plus the pure services
//! that derive row state from them.
pub mod domain;
pub mod policies;
pub mod services;
