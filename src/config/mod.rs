//! Configuration subsystem.
//!
//! # Responsibilities
//! - Define the configuration schema (serde types with defaults)
//! - Load configuration from a TOML file
//! - Validate configuration before the server starts
//!
//! # Design Decisions
//! - Every field has a default so the service runs with no config file
//! - The config file path comes from the `AGENDA_CONFIG` env var

pub mod loader;
pub mod schema;

pub use schema::{AppConfig, ListenerConfig, ObservabilityConfig};
