//! Agenda API Library
//!
//! A minimal contact-directory service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌─────────────────────────────────────────────┐
//!                      │                 AGENDA API                   │
//!                      │                                              │
//!   Client Request     │  ┌──────────┐    ┌──────────┐               │
//!   ───────────────────┼─▶│   http   │───▶│ contacts │               │
//!                      │  │ handlers │    │ service  │               │
//!                      │  └──────────┘    └────┬─────┘               │
//!                      │        │              ▼                      │
//!                      │        │        ┌──────────┐                │
//!                      │        │        │ contacts │                │
//!                      │        │        │  store   │                │
//!                      │        ▼        └──────────┘                │
//!                      │  ┌──────────┐                               │
//!                      │  │sysmetrics│  (live /proc + df sampling)   │
//!                      │  └──────────┘                               │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────────────────────┐ │ │
//!                      │  │  │ config │ │ observability           │ │ │
//!                      │  │  │        │ │ (logging + metrics)     │ │ │
//!                      │  │  └────────┘ └─────────────────────────┘ │ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod contacts;
pub mod http;
pub mod observability;
pub mod sysmetrics;

pub use config::AppConfig;
pub use contacts::{Contact, ContactService, ContactStore};
pub use http::HttpServer;
