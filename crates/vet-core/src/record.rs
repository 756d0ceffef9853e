//! Traits that let the workflow run generically over ideas and videos.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::entities::{Idea, Video};
use crate::enums::{IdeaStatus, RecordKind, ReviewAction, VideoStatus};
use crate::errors::ReviewError;
use crate::ids::RecordId;
use crate::palette::{self, StatusBadge};

/// A status enumeration driving a record's lifecycle.
pub trait WorkflowStatus:
    Copy + Eq + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// State reached by issuing `action`, or `None` if the edge does not exist.
    fn next_for(self, action: ReviewAction) -> Option<Self>;

    /// No further transition exists, issued or observed.
    fn is_terminal(self) -> bool;

    /// Whether the record must carry a publication time in this state.
    fn is_scheduled(self) -> bool {
        false
    }

    fn badge(self) -> &'static StatusBadge;

    fn as_str(self) -> &'static str;
}

impl WorkflowStatus for IdeaStatus {
    fn next_for(self, action: ReviewAction) -> Option<Self> {
        Self::next_for(self, action)
    }

    fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    fn badge(self) -> &'static StatusBadge {
        match self {
            Self::Pending => &palette::PENDING,
            Self::Approved => &palette::APPROVED,
            Self::Rejected => &palette::REJECTED,
        }
    }

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl WorkflowStatus for VideoStatus {
    fn next_for(self, action: ReviewAction) -> Option<Self> {
        Self::next_for(self, action)
    }

    fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    fn is_scheduled(self) -> bool {
        self == Self::Scheduled
    }

    fn badge(self) -> &'static StatusBadge {
        match self {
            Self::Pending => &palette::PENDING,
            Self::Approved => &palette::APPROVED,
            Self::Rejected => &palette::REJECTED,
            Self::Scheduled => &palette::SCHEDULED,
            Self::Published => &palette::PUBLISHED,
        }
    }

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

/// A record shown in a review panel.
pub trait Reviewable:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Status: WorkflowStatus;

    const KIND: RecordKind;

    fn id(&self) -> &RecordId;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn created_at(&self) -> DateTime<Utc>;

    fn scheduled_for(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn media_ref(&self) -> Option<&str> {
        None
    }

    /// `scheduled_for` is present exactly when the status is scheduled.
    fn schedule_consistent(&self) -> bool {
        self.scheduled_for().is_some() == self.status().is_scheduled()
    }

    /// Bring a freshly decoded record in line with the schedule invariant.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Network`] when the record cannot be repaired.
    fn normalize(self) -> Result<Self, ReviewError> {
        Ok(self)
    }
}

impl Reviewable for Idea {
    type Status = IdeaStatus;

    const KIND: RecordKind = RecordKind::Idea;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> IdeaStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Reviewable for Video {
    type Status = VideoStatus;

    const KIND: RecordKind = RecordKind::Video;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> VideoStatus {
        self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn scheduled_for(&self) -> Option<DateTime<Utc>> {
        self.scheduled_for
    }

    fn media_ref(&self) -> Option<&str> {
        Some(&self.media_ref)
    }

    fn normalize(mut self) -> Result<Self, ReviewError> {
        match (self.status, self.scheduled_for) {
            (VideoStatus::Scheduled, None) => Err(ReviewError::network(
                "decode video",
                format!("video {} is scheduled but has no scheduled_time", self.id),
            )),
            (status, Some(_)) if status != VideoStatus::Scheduled => {
                tracing::warn!(
                    id = %self.id,
                    %status,
                    "dropping scheduled_time on non-scheduled video"
                );
                self.scheduled_for = None;
                Ok(self)
            }
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn video(status: VideoStatus, scheduled: bool) -> Video {
        Video {
            id: RecordId::from("5"),
            title: "Jardinage bio".into(),
            description: String::new(),
            status,
            scheduled_for: scheduled.then(|| Utc.with_ymd_and_hms(2025, 7, 5, 12, 0, 0).unwrap()),
            media_ref: "https://cdn.example/clip.mp4".into(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 30, 11, 30, 0).unwrap(),
        }
    }

    #[test]
    fn normalize_drops_stray_schedule_time() {
        let normalized = video(VideoStatus::Published, true).normalize().unwrap();
        assert!(normalized.scheduled_for.is_none());
        assert!(normalized.schedule_consistent());
    }

    #[test]
    fn normalize_rejects_scheduled_without_time() {
        let err = video(VideoStatus::Scheduled, false).normalize().unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Network);
    }

    #[test]
    fn normalize_keeps_consistent_records() {
        let scheduled = video(VideoStatus::Scheduled, true);
        assert_eq!(scheduled.clone().normalize().unwrap(), scheduled);
    }

    #[test]
    fn terminal_states() {
        assert!(IdeaStatus::Approved.is_terminal());
        assert!(!VideoStatus::Approved.is_terminal());
        assert!(VideoStatus::Published.is_terminal());
        assert!(VideoStatus::Rejected.is_terminal());
    }
}
