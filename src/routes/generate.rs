use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::generate::GenerateVideoRequest;
use crate::services::relay;

/// POST /generate-video — record, generate, and record again.
///
/// Validation failures return before any upstream call is made. On success
/// Runway's body is returned byte for byte.
pub async fn generate_video(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let prompt = request.into_prompt().ok_or(ApiError::MissingFields)?;

    let result = relay::generate_video(&state, &prompt).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], result.into_raw()).into_response())
}
