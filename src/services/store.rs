use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;

use crate::models::video_request::{CreatedRecord, NewVideoRequest, RecordId, VideoRequestUpdate};

/// Client for the Xano `video_requests` table.
pub struct DataStoreClient {
    http: Client,
    base_url: String,
}

impl DataStoreClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build().map_err(StoreError::Http)?,
            base_url: base_url.to_string(),
        })
    }

    /// Configured base URL, reported back to callers when creation fails.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/video_requests`, plus the percent-encoded record id when given.
    fn table_url(&self, id: Option<&RecordId>) -> Result<Url, StoreError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| StoreError::BaseUrl(e.to_string()))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::BaseUrl(self.base_url.clone()))?;
            segments.pop_if_empty().push("video_requests");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }

        Ok(url)
    }

    /// Create a row and return the identifier Xano assigned to it.
    pub async fn create_request(&self, request: &NewVideoRequest<'_>) -> Result<RecordId, StoreError> {
        let response = self
            .http
            .post(self.table_url(None)?)
            .json(request)
            .send()
            .await
            .map_err(StoreError::Http)?
            .error_for_status()
            .map_err(StoreError::Http)?;

        let body: Value = response.json().await.map_err(StoreError::Http)?;

        CreatedRecord::from_value(body)
            .and_then(CreatedRecord::into_id)
            .ok_or(StoreError::MissingId)
    }

    /// Patch the status (and result URL) of an existing row.
    pub async fn update_request(
        &self,
        id: &RecordId,
        update: &VideoRequestUpdate,
    ) -> Result<(), StoreError> {
        if !id.is_addressable() {
            return Err(StoreError::InvalidRecordId(id.to_string()));
        }
        let url = self.table_url(Some(id))?;

        self.http
            .patch(url)
            .json(update)
            .send()
            .await
            .map_err(StoreError::Http)?
            .error_for_status()
            .map_err(StoreError::Http)?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Xano response did not contain a record id")]
    MissingId,

    #[error("Invalid Xano base URL: {0}")]
    BaseUrl(String),

    #[error("Record id {0:?} does not address a single row")]
    InvalidRecordId(String),
}
