//! Test helper utilities: a router wired to mock Xano and Runway servers

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use video_relay::app_state::AppState;
use video_relay::config::AppConfig;
use video_relay::routes;
use wiremock::MockServer;

use crate::fixtures::TEST_API_KEY;

pub const INFERENCE_PATH: &str = "/v1/inference";

/// Router under test plus the two upstream mocks it talks to.
pub struct TestApp {
    pub xano: MockServer,
    pub runway: MockServer,
    pub router: Router,
    /// Backs the router's `/metrics`; install it locally to capture counters.
    pub recorder: PrometheusRecorder,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Start with the default mock-backed config, adjusted by `configure`.
    pub async fn start_with(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let xano = MockServer::start().await;
        let runway = MockServer::start().await;

        let mut config = AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            runway_api_key: TEST_API_KEY.to_string(),
            runway_api_url: format!("{}{}", runway.uri(), INFERENCE_PATH),
            xano_api_url: xano.uri(),
            outbound_timeout_secs: Some(5),
        };
        configure(&mut config);

        let state = AppState::from_config(config).expect("Failed to build app state");
        let recorder = PrometheusBuilder::new().build_recorder();
        let prometheus = Arc::new(recorder.handle());

        Self {
            xano,
            runway,
            router: routes::router(state, prometheus),
            recorder,
        }
    }

    /// Send a request through the router and return status, headers and raw body.
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, headers, bytes.to_vec())
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let (status, _, body) = self.send_raw(request).await;
        (status, body)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, bytes) = self.send(request).await;
        let json = serde_json::from_slice(&bytes).expect("Response body was not JSON");
        (status, json)
    }

    pub async fn generate(&self, body: &Value) -> (StatusCode, Value) {
        self.post_json("/generate-video", body).await
    }

    /// Requests Xano received with the given method, in arrival order.
    pub async fn xano_requests(&self, method: &str) -> Vec<RecordedCall> {
        recorded(&self.xano, method).await
    }

    pub async fn runway_requests(&self) -> Vec<RecordedCall> {
        recorded(&self.runway, "POST").await
    }
}

/// A request captured by a mock server.
#[derive(Debug)]
pub struct RecordedCall {
    pub path: String,
    pub body: Value,
}

async fn recorded(server: &MockServer, method: &str) -> Vec<RecordedCall> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method)
        .map(|r| RecordedCall {
            path: r.url.path().to_string(),
            body: serde_json::from_slice(&r.body).unwrap_or(Value::Null),
        })
        .collect()
}

/// An http URL on localhost where nothing is listening.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}")
}

/// Total requests seen by a mock server, any method.
pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}
