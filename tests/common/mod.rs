//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;

use agenda_api::{AppConfig, HttpServer};

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// The Prometheus recorder is process-global; install it once and share
/// the render handle across every server the test binary spawns.
fn metrics_handle() -> PrometheusHandle {
    RECORDER
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("install Prometheus recorder")
        })
        .clone()
}

/// Config suitable for tests: ephemeral port, short CPU sampling window.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.cpu_sample_ms = 10;
    config
}

/// Spawn a real server (own empty store) on an ephemeral port.
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(test_config()).await
}

pub async fn spawn_server_with(config: AppConfig) -> SocketAddr {
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let server = HttpServer::new(config, metrics_handle());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
