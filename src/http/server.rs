//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request logging, CORS, tower-http tracing)
//! - Own the application state injected into handlers
//! - Serve with graceful shutdown

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ObservabilityConfig};
use crate::contacts::{ContactService, ContactStore};
use crate::http::{handlers, middleware};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ContactService>,
    pub observability: ObservabilityConfig,
    pub metrics: PrometheusHandle,
}

/// HTTP server for the agenda API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration. The contact
    /// store is created here, empty, and lives as long as the server.
    pub fn new(config: AppConfig, metrics: PrometheusHandle) -> Self {
        let store = Arc::new(ContactStore::new());
        let service = Arc::new(ContactService::new(store));

        let state = AppState {
            service,
            observability: config.observability.clone(),
            metrics,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/system-metrics", get(handlers::system_metrics))
            .route(
                "/system-metrics-prometheus",
                get(handlers::system_metrics_prometheus),
            )
            .route(
                "/contatos",
                post(handlers::create_contact).get(handlers::list_contacts),
            )
            .route("/contatos/{id}", get(handlers::get_contact));

        if config.observability.metrics_enabled {
            router = router.route("/metrics", get(handlers::prometheus_metrics));
        }

        router
            .with_state(state)
            .layer(axum::middleware::from_fn(middleware::log_requests))
            // Open CORS posture, matching the original deployment
            .layer(CorsLayer::very_permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler means no graceful trigger; keep serving.
        tracing::error!("Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
