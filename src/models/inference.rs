use axum::body::Bytes;
use serde::Serialize;
use serde_json::Value;

/// Body sent to the Runway inference endpoint.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub input: InferenceInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct InferenceInput<'a> {
    pub image: &'a str,
    pub prompt: &'a str,
}

impl<'a> InferenceRequest<'a> {
    pub fn new(image: &'a str, prompt: &'a str) -> Self {
        Self {
            input: InferenceInput { image, prompt },
        }
    }
}

/// A successful inference response. The body is relayed untouched; the
/// parsed view is only read for `output.video`.
#[derive(Debug, Clone)]
pub struct InferenceResult {
    raw: Bytes,
    payload: Value,
}

impl InferenceResult {
    /// Fails if the body is not JSON.
    pub fn from_bytes(raw: Bytes) -> Result<Self, serde_json::Error> {
        let payload = serde_json::from_slice(&raw)?;
        Ok(Self { raw, payload })
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn video_url(&self) -> String {
        video_url(&self.payload)
    }

    pub fn into_raw(self) -> Bytes {
        self.raw
    }
}

/// Pull `output.video` out of an inference result. Missing or non-string
/// values give an empty string.
pub fn video_url(result: &Value) -> String {
    result
        .pointer("/output/video")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
