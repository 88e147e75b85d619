use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{
    inference::{InferenceClient, InferenceError},
    store::{DataStoreClient, StoreError},
};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<DataStoreClient>,
    pub inference: Arc<InferenceClient>,
}

impl AppState {
    pub fn new(config: AppConfig, store: DataStoreClient, inference: InferenceClient) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            inference: Arc::new(inference),
        }
    }

    /// Build both upstream clients from configuration.
    pub fn from_config(config: AppConfig) -> Result<Self, StateError> {
        let timeout = config.outbound_timeout();
        let store = DataStoreClient::new(&config.xano_api_url, timeout)?;
        let inference =
            InferenceClient::new(&config.runway_api_url, &config.runway_api_key, timeout)?;
        Ok(Self::new(config, store, inference))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to build Xano client: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to build Runway client: {0}")]
    Inference(#[from] InferenceError),
}
