//! HTTP server wiring: router construction, listener startup, and the
//! Prometheus metrics exporter.

use crate::rest::{self, AppState};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use targeting_core::config::AppConfig;
use targeting_engine::Evaluator;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the delivery router. Non-GET methods on a routed path get a
/// 405 from axum's method routing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/delivery", get(rest::handle_delivery))
        .route("/health", get(rest::health_check))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct ApiServer {
    config: AppConfig,
    evaluator: Arc<Evaluator>,
}

impl ApiServer {
    pub fn new(config: AppConfig, evaluator: Arc<Evaluator>) -> Self {
        Self { config, evaluator }
    }

    /// Start the HTTP server; resolves when `shutdown` does.
    pub async fn start_http(
        &self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let state = AppState {
            evaluator: self.evaluator.clone(),
            start_time: Instant::now(),
        };

        let app = router(state);

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }

    /// Start the metrics exporter on a separate port.
    pub fn start_metrics(&self) -> anyhow::Result<()> {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
