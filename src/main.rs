use tokio::net::TcpListener;

use agenda_api::config::loader;
use agenda_api::http::HttpServer;
use agenda_api::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "agenda-api starting");

    // Load configuration (AGENDA_CONFIG points at a TOML file, defaults otherwise)
    let config = loader::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        cpu_sample_ms = config.observability.cpu_sample_ms,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    // Install the Prometheus recorder before any request can record metrics
    let metrics_handle = observability::metrics::install_recorder()?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config, metrics_handle);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
