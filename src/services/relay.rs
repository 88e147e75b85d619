//! Three-step relay: create the Xano row, call Runway, record the outcome.
//!
//! Every outbound failure is terminal for the request. Once a row exists the
//! relay tries to leave it `completed` or `failed`; only a failed final
//! update can leave it `pending`, and that failure is returned to the caller.

use std::time::Instant;
use tracing::{info, warn, Span};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::generate::VideoPrompt;
use crate::models::inference::{InferenceRequest, InferenceResult};
use crate::models::video_request::{NewVideoRequest, RecordId, VideoRequestUpdate, VideoStatus};
use crate::services::inference::InferenceError;
use crate::services::store::{DataStoreClient, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Failed to create request in Xano: {source}")]
    StoreCreate {
        #[source]
        source: StoreError,
        store_url: String,
    },

    #[error("Failed to generate video: {0}")]
    Inference(#[source] InferenceError),

    #[error("Failed to update Xano with result: {0}")]
    StoreUpdate(#[source] StoreError),
}

/// Run a validated prompt through Xano and Runway, returning Runway's response.
#[tracing::instrument(
    name = "relay",
    skip_all,
    fields(relay_id = %Uuid::new_v4(), record_id = tracing::field::Empty)
)]
pub async fn generate_video(
    state: &AppState,
    prompt: &VideoPrompt,
) -> Result<InferenceResult, RelayError> {
    metrics::counter!("video_requests_total").increment(1);

    let new_request = NewVideoRequest {
        image_url: &prompt.image_url,
        prompt: &prompt.prompt,
        status: VideoStatus::Pending,
    };

    let record_id = match state.store.create_request(&new_request).await {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Failed to create video request in Xano");
            metrics::counter!("video_requests_failed", "stage" => "store_create").increment(1);
            return Err(RelayError::StoreCreate {
                source: e,
                store_url: state.store.base_url().to_string(),
            });
        }
    };
    Span::current().record("record_id", tracing::field::display(&record_id));
    info!(status = %new_request.status, "Video request recorded");

    let started = Instant::now();
    let outcome = state
        .inference
        .generate(&InferenceRequest::new(&prompt.image_url, &prompt.prompt))
        .await;
    metrics::histogram!("inference_duration_seconds").record(started.elapsed().as_secs_f64());

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, upstream_status = ?e.status(), "Runway inference failed");
            metrics::counter!("video_requests_failed", "stage" => "inference").increment(1);
            mark_failed(&state.store, &record_id).await;
            return Err(RelayError::Inference(e));
        }
    };

    let update = VideoRequestUpdate::completed(result.video_url());
    if let Err(e) = state.store.update_request(&record_id, &update).await {
        warn!(error = %e, "Failed to record completed video in Xano");
        metrics::counter!("video_requests_failed", "stage" => "store_update").increment(1);
        return Err(RelayError::StoreUpdate(e));
    }

    metrics::counter!("video_requests_completed").increment(1);
    info!(status = %update.status, result_url = ?update.result_url, "Video request completed");

    Ok(result)
}

/// Best-effort transition to `failed`. Errors are logged and never returned.
pub async fn mark_failed(store: &DataStoreClient, record_id: &RecordId) {
    match store.update_request(record_id, &VideoRequestUpdate::failed()).await {
        Ok(()) => info!(record_id = %record_id, "Video request marked failed"),
        Err(e) => warn!(
            record_id = %record_id,
            error = %e,
            "Failed to mark video request as failed in Xano"
        ),
    }
}
