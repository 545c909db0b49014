/// Application layer - Use cases, DTOs, read models and the alert store
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod store;
pub mod use_cases;
