//! HTTP-facing error type.
//!
//! Every failure is rendered as a JSON object with an `error` message and,
//! where useful, `details` plus upstream diagnostics.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use crate::services::relay::RelayError;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str =
    "405 Method Not Allowed: The method is not allowed for the requested URL.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing image_url or prompt")]
    MissingFields,

    #[error("Invalid JSON body")]
    InvalidBody(String),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Relay(RelayError::Inference(e)) => match e.status() {
                Some(status) if status.is_client_error() || status.is_server_error() => status,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match self {
            ApiError::MissingFields | ApiError::MethodNotAllowed => json!({ "error": self.to_string() }),
            ApiError::InvalidBody(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            ApiError::Relay(RelayError::StoreCreate { source, store_url }) => json!({
                "error": "Failed to create request in Xano",
                "details": source.to_string(),
                "xano_url": store_url,
            }),
            ApiError::Relay(RelayError::Inference(e)) => {
                let mut body = Map::new();
                body.insert("error".into(), "Failed to generate video".into());
                body.insert("details".into(), e.to_string().into());
                if let Some(status) = e.status() {
                    body.insert("upstream_status".into(), status.as_u16().into());
                }
                if let Some(raw) = e.body() {
                    // Keep structured upstream errors structured.
                    let parsed = serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw));
                    body.insert("upstream_body".into(), parsed);
                }
                Value::Object(body)
            }
            ApiError::Relay(RelayError::StoreUpdate(source)) => json!({
                "error": "Failed to update Xano with result",
                "details": source.to_string(),
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
