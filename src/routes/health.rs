use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub data_store: ComponentHealth,
    pub inference: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

impl ComponentHealth {
    fn configured(value: &str) -> Self {
        let status = if value.trim().is_empty() { "unconfigured" } else { "ok" };
        Self {
            status: status.to_string(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// GET /health — reports whether both upstreams are configured.
///
/// Makes no outbound calls; Xano and Runway are only contacted per request.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let data_store = ComponentHealth::configured(&state.config.xano_api_url);
    let inference = ComponentHealth::configured(&state.config.runway_api_key);

    let all_healthy = data_store.is_ok() && inference.is_ok();
    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if all_healthy {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            data_store,
            inference,
        },
    };

    (status_code, Json(response))
}
