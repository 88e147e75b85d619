use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::generate::RootEchoResponse;

pub const GREETING: &str = "Hello, World! Runway AI Video Generation API is running. \
Use POST /generate-video to generate videos.";

/// GET / — liveness greeting.
pub async fn greeting() -> &'static str {
    GREETING
}

/// POST / — echo the JSON body back with a pointer to the real endpoint.
pub async fn echo(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RootEchoResponse>, ApiError> {
    let Json(received_data) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    Ok(Json(RootEchoResponse {
        message: "This is the root endpoint. To generate videos, use POST /generate-video"
            .to_string(),
        received_data,
    }))
}
