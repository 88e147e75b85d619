use serde::Deserialize;
use std::time::Duration;

/// Runway inference endpoint used when `RUNWAY_API_URL` is not set.
pub const DEFAULT_RUNWAY_API_URL: &str = "https://api.runwayml.com/v1/inference";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Runway API key, sent as a bearer token. Not validated at startup.
    #[serde(default)]
    pub runway_api_key: String,

    /// Runway inference endpoint
    #[serde(default = "default_runway_api_url")]
    pub runway_api_url: String,

    /// Xano API base URL (the `video_requests` table lives under it).
    /// Not validated at startup.
    #[serde(default)]
    pub xano_api_url: String,

    /// Optional timeout applied to every outbound request, in seconds.
    #[serde(default)]
    pub outbound_timeout_secs: Option<u64>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_runway_api_url() -> String {
    DEFAULT_RUNWAY_API_URL.to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn outbound_timeout(&self) -> Option<Duration> {
        self.outbound_timeout_secs.map(Duration::from_secs)
    }
}
