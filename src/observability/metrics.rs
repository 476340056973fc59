//! Metrics collection and exposition.
//!
//! # Metrics
//! - `agenda_requests_total` (counter): requests by method, path, status
//! - `agenda_request_duration_seconds` (histogram): latency by method, path
//!
//! # Design Decisions
//! - The Prometheus recorder is installed globally at startup; the render
//!   handle is threaded through AppState to the `/metrics` handler
//! - Recording happens in the request middleware, once per request

use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Install the global Prometheus recorder and return its render handle.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, started: Instant) {
    counter!(
        "agenda_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "agenda_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(started.elapsed().as_secs_f64());
}
