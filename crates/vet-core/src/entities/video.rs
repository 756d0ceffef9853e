use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VideoStatus;
use crate::ids::RecordId;

/// A generated video awaiting review, scheduling or publication.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Video {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: VideoStatus,
    /// Publication time; present only while `status == scheduled`.
    #[serde(rename = "scheduled_time", default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Playable media location, handed to the player untouched.
    #[serde(rename = "file_path")]
    pub media_ref: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /videos/{id}/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub scheduled_time: DateTime<Utc>,
}
