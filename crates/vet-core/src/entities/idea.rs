use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::IdeaStatus;
use crate::ids::RecordId;

/// A textual content idea submitted for review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Idea {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /ideas`. Built only through validation, so both fields are
/// trimmed and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewIdea {
    pub title: String,
    pub description: String,
}
