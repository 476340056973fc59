//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request middleware and handlers produce:
//!     → logging.rs (structured JSON log events)
//!     → metrics.rs (request counters and latency histograms)
//!     → tracing spans (create/search operations with attributes)
//!
//! Consumers:
//!     → Log aggregation (stdout JSON lines)
//!     → Metrics endpoint (Prometheus scrape at /metrics)
//!     → Any collector attached via a tracing subscriber layer
//! ```
//!
//! # Design Decisions
//! - Spans go through the `tracing` facade only; exporter wiring is an
//!   external collaborator and never touches business code
//! - Metrics are cheap (atomic increments through the `metrics` macros)
//! - None of this affects request outcomes

pub mod logging;
pub mod metrics;
