use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use video_relay::app_state::AppState;
use video_relay::config::AppConfig;
use video_relay::routes;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing video-relay server");

    if config.xano_api_url.is_empty() {
        tracing::warn!("XANO_API_URL is not set; requests will fail at the Xano step");
    }
    if config.runway_api_key.is_empty() {
        tracing::warn!("RUNWAY_API_KEY is not set; Runway will reject requests");
    }

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "video_requests_total",
        "Total video generation requests accepted for relay"
    );
    metrics::describe_counter!(
        "video_requests_completed",
        "Total video requests recorded as completed"
    );
    metrics::describe_counter!(
        "video_requests_failed",
        "Total video requests that failed, by stage"
    );
    metrics::describe_histogram!(
        "inference_duration_seconds",
        "Time spent waiting on the Runway inference call"
    );

    let bind_addr = config.bind_addr.clone();

    // Initialize Xano and Runway clients
    tracing::info!(
        xano_api_url = %config.xano_api_url,
        runway_api_url = %config.runway_api_url,
        "Initializing upstream clients"
    );
    let state = AppState::from_config(config).expect("Failed to initialize upstream clients");

    let app = routes::router(state, prometheus_handle)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1 MB limit

    tracing::info!("Starting video-relay on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
