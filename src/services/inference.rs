use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::models::inference::{InferenceRequest, InferenceResult};

/// Client for the Runway image-to-video inference endpoint.
pub struct InferenceClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl InferenceClient {
    pub fn new(api_url: &str, api_key: &str, timeout: Option<Duration>) -> Result<Self, InferenceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().map_err(InferenceError::Http)?,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Submit an image and prompt, returning the result body as received.
    pub async fn generate(
        &self,
        request: &InferenceRequest<'_>,
    ) -> Result<InferenceResult, InferenceError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(InferenceError::Http)?;

        let status = response.status();
        if !status.is_success() {
            // Body is diagnostic only; a failed read leaves it empty.
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream { status, body });
        }

        let bytes = response.bytes().await.map_err(InferenceError::Http)?;
        InferenceResult::from_bytes(bytes).map_err(InferenceError::Parse)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Runway returned {status}")]
    Upstream { status: StatusCode, body: String },

    #[error("Failed to parse Runway response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl InferenceError {
    /// Upstream HTTP status, when Runway answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            InferenceError::Upstream { status, .. } => Some(*status),
            InferenceError::Http(e) => e.status(),
            InferenceError::Parse(_) => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            InferenceError::Upstream { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
