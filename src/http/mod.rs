//! HTTP surface.
//!
//! # Responsibilities
//! - Build the Axum router and application state
//! - Map routes to contact-service and system-metrics operations
//! - Translate errors into the API's response shapes
//! - Wrap every request in logging and metrics middleware

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
