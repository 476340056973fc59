//! Request logging and metrics middleware.
//!
//! Every request gets a `request_started` event before dispatch and a
//! `request_completed` event (status, elapsed seconds rounded to 4
//! decimals) after, plus a counter increment and a latency observation.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::metrics;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();

    let method = request.method().to_string();
    let url = request.uri().to_string();
    let path = request.uri().path().to_string();
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::info!(
        event = "request_started",
        method = %method,
        url = %url,
        client_ip = %client_ip,
    );

    let response = next.run(request).await;

    let status_code = response.status().as_u16();
    let process_time = (started.elapsed().as_secs_f64() * 10_000.0).round() / 10_000.0;

    tracing::info!(
        event = "request_completed",
        method = %method,
        url = %url,
        status_code = status_code,
        process_time = process_time,
    );

    metrics::record_request(&method, &path, status_code, started);

    response
}
