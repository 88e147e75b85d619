use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Lifecycle of a `video_requests` row in Xano.
///
/// A record starts `Pending` and moves exactly once to `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, Serialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VideoStatus {
    Pending,
    Completed,
    Failed,
}

/// Identifier assigned by Xano. Kept opaque; only ever echoed back in a path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    /// Whether the id can address a single row. Empty and dot-segment ids
    /// would resolve to the collection or a parent path.
    pub fn is_addressable(&self) -> bool {
        match self {
            RecordId::Int(_) => true,
            RecordId::Str(id) => !matches!(id.as_str(), "" | "." | ".."),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Str(id) => f.write_str(id),
        }
    }
}

/// Body for `POST /video_requests`.
#[derive(Debug, Clone, Serialize)]
pub struct NewVideoRequest<'a> {
    pub image_url: &'a str,
    pub prompt: &'a str,
    pub status: VideoStatus,
}

/// Body for `PATCH /video_requests/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoRequestUpdate {
    pub status: VideoStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
}

impl VideoRequestUpdate {
    pub fn completed(result_url: String) -> Self {
        Self {
            status: VideoStatus::Completed,
            result_url: Some(result_url),
        }
    }

    pub fn failed() -> Self {
        Self {
            status: VideoStatus::Failed,
            result_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordRef {
    #[serde(default)]
    pub id: Option<RecordId>,
}

/// Response of the create call. Xano answers with the row itself, or with a
/// list of rows when the endpoint is configured for batch inserts.
// Batch must stay first: derived struct visitors also accept sequences.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedRecord {
    Batch(Vec<RecordRef>),
    Single(RecordRef),
}

impl CreatedRecord {
    /// Parse a raw create response. Anything that is neither an object nor
    /// a list of objects yields `None`.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }

    /// Resolve the identifier of the created row. Ids that cannot address
    /// a row resolve to `None`.
    pub fn into_id(self) -> Option<RecordId> {
        let id = match self {
            CreatedRecord::Single(record) => record.id,
            CreatedRecord::Batch(records) => records.into_iter().next().and_then(|r| r.id),
        };
        id.filter(RecordId::is_addressable)
    }
}
