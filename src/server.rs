//! HTTP Server and Startup Wiring
//!
//! This module implements the Prometheus exporter HTTP server and starts the
//! background collection loop.
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Prometheus metrics in text format
//! - `GET /health` - Returns 200 if the last controller discovery succeeded, 503 otherwise
//!
//! # Metrics Collection
//!
//! The collection loop runs on its own task, independent of scrapes. Scrapes
//! only read the [`MetricsStore`]; they never trigger an ssacli call.

use crate::config::Config;
use crate::error::ExporterError;
use crate::metrics::MetricsStore;
use crate::scheduler::Scheduler;
use crate::ssacli::SsacliRunner;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::watch;
use tracing::{error, info, warn};

#[derive(Clone)]
struct AppState {
    metrics: MetricsStore,
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    let metrics = MetricsStore::new()?;
    let runner = SsacliRunner::new(config.collector.command.clone());
    let scheduler = Scheduler::new(runner, metrics.clone(), config.collector.clone());

    // Start background metrics collection
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let collection = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

    let app = router(metrics);

    let addr = format!("{}:{}", config.server.addr, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ExporterError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Waiting for the in-flight collection cycle to finish");
    let _ = shutdown_tx.send(true);
    match collection.await {
        Ok(cycles) => info!("Collection loop finished after {} cycles", cycles),
        Err(e) => error!("Collection task failed: {}", e),
    }

    Ok(())
}

/// Builds the HTTP router over a metrics store.
pub fn router(metrics: MetricsStore) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(AppState { metrics })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server simply runs until killed
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn root_handler() -> impl IntoResponse {
    axum::response::Html(
        r#"<html>
<head><title>ssacli Exporter</title></head>
<body>
<h1>Smart Array Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
    )
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Ok(metrics) => metrics.into_response(),
        Err(e) => {
            error!("Failed to render metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.metrics.is_up() {
        (axum::http::StatusCode::OK, "OK")
    } else {
        (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            "ssacli controller discovery failing",
        )
    }
}
