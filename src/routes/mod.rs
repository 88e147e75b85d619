use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::ApiError;

pub mod generate;
pub mod health;
pub mod metrics;
pub mod root;

/// Build the application router.
///
/// The 405 fallback is attached last so it covers every route above it.
pub fn router(state: AppState, prometheus: Arc<PrometheusHandle>) -> Router {
    Router::new()
        .route("/", get(root::greeting).post(root::echo))
        .route("/generate-video", post(generate::generate_video))
        .route("/health", get(health::health_check))
        .with_state(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(prometheus),
        )
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
