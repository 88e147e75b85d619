use garde::Validate;
use serde::{Deserialize, Serialize};

/// Inbound body for `POST /generate-video`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported by validation rather than as a JSON syntax error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GenerateVideoRequest {
    #[garde(required, length(min = 1))]
    #[serde(default)]
    pub image_url: Option<String>,

    #[garde(required, length(min = 1))]
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPrompt {
    pub image_url: String,
    pub prompt: String,
}

impl GenerateVideoRequest {
    /// Validate and unwrap into a `VideoPrompt`. `None` means at least one
    /// field was absent or empty.
    pub fn into_prompt(self) -> Option<VideoPrompt> {
        self.validate().ok()?;
        Some(VideoPrompt {
            image_url: self.image_url?,
            prompt: self.prompt?,
        })
    }
}

/// Response for `POST /`.
#[derive(Debug, Serialize)]
pub struct RootEchoResponse {
    pub message: String,
    pub received_data: serde_json::Value,
}
