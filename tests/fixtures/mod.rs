//! Test fixtures shared by the integration and e2e suites

use serde_json::{json, Value};

pub const TEST_API_KEY: &str = "test-runway-key";
pub const TEST_IMAGE_URL: &str = "https://images.example.com/beach.png";
pub const TEST_PROMPT: &str = "slow pan across the waves at sunset";
pub const TEST_VIDEO_URL: &str = "https://x/y.mp4";

/// A valid `/generate-video` body.
pub fn generate_body() -> Value {
    json!({
        "image_url": TEST_IMAGE_URL,
        "prompt": TEST_PROMPT,
    })
}

/// The row Xano is expected to receive on creation.
pub fn pending_row() -> Value {
    json!({
        "image_url": TEST_IMAGE_URL,
        "prompt": TEST_PROMPT,
        "status": "pending",
    })
}

/// The body Runway is expected to receive.
pub fn inference_body() -> Value {
    json!({
        "input": {
            "image": TEST_IMAGE_URL,
            "prompt": TEST_PROMPT,
        }
    })
}

/// A successful Runway payload with a video output.
pub fn inference_result() -> Value {
    json!({
        "id": "task-7f3a",
        "status": "SUCCEEDED",
        "output": { "video": TEST_VIDEO_URL },
        "metadata": { "duration": 4, "seed": 1234 },
    })
}

/// Bodies that must be rejected before any upstream call.
pub fn incomplete_bodies() -> Vec<Value> {
    vec![
        json!({}),
        json!({ "prompt": TEST_PROMPT }),
        json!({ "image_url": TEST_IMAGE_URL }),
        json!({ "image_url": "", "prompt": TEST_PROMPT }),
        json!({ "image_url": TEST_IMAGE_URL, "prompt": "" }),
        json!({ "image_url": null, "prompt": null }),
    ]
}
