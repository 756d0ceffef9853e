//! Status transition rules and pre-network validation.
//!
//! These are the source of truth for what the console may send. A caller
//! that hides a button still goes through [`check_transition`] before any
//! request is issued.

use chrono::{DateTime, Utc};

use crate::entities::NewIdea;
use crate::enums::{RecordKind, ReviewAction};
use crate::errors::ReviewError;
use crate::ids::RecordId;
use crate::record::WorkflowStatus;

/// An action plus the side data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub action: ReviewAction,
    /// Publication time, required for [`ReviewAction::Schedule`].
    pub when: Option<DateTime<Utc>>,
}

impl TransitionRequest {
    #[must_use]
    pub const fn approve() -> Self {
        Self {
            action: ReviewAction::Approve,
            when: None,
        }
    }

    #[must_use]
    pub const fn reject() -> Self {
        Self {
            action: ReviewAction::Reject,
            when: None,
        }
    }

    #[must_use]
    pub const fn schedule(when: DateTime<Utc>) -> Self {
        Self {
            action: ReviewAction::Schedule,
            when: Some(when),
        }
    }
}

/// Whether `action` is an edge out of `current`.
///
/// The record kind is carried by the status type: an idea status never
/// accepts `schedule`.
#[must_use]
pub fn can_transition<S: WorkflowStatus>(current: S, action: ReviewAction) -> bool {
    current.next_for(action).is_some()
}

/// Full pre-issue check: graph edge plus the side data the action needs.
///
/// Returns the status the record will hold once the backend confirms.
///
/// # Errors
///
/// - [`ReviewError::InvalidTransition`] if the action is not an edge out of `current`.
/// - [`ReviewError::Validation`] if a schedule has no time or a time not after `now`.
pub fn check_transition<S: WorkflowStatus>(
    kind: RecordKind,
    id: &RecordId,
    current: S,
    request: &TransitionRequest,
    now: DateTime<Utc>,
) -> Result<S, ReviewError> {
    let Some(next) = current.next_for(request.action) else {
        return Err(ReviewError::InvalidTransition {
            kind,
            id: id.clone(),
            from: current.as_str().to_string(),
            action: request.action,
        });
    };

    if request.action == ReviewAction::Schedule {
        validate_schedule_time(request.when, now)?;
    }

    Ok(next)
}

/// A schedule time must be supplied and strictly later than `now`.
///
/// # Errors
///
/// Returns [`ReviewError::Validation`] when `when` is missing or not in the future.
pub fn validate_schedule_time(
    when: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ReviewError> {
    let Some(when) = when else {
        return Err(ReviewError::Validation(
            "A publication time is required to schedule a video".to_string(),
        ));
    };
    if when <= now {
        return Err(ReviewError::Validation(format!(
            "Publication time {} must be in the future",
            when.to_rfc3339()
        )));
    }
    Ok(when)
}

/// Title and description are both required after trimming.
///
/// # Errors
///
/// Returns [`ReviewError::Validation`] if either field is blank.
pub fn validate_new_idea(title: &str, description: &str) -> Result<NewIdea, ReviewError> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(ReviewError::Validation(
            "Title and description are required".to_string(),
        ));
    }
    Ok(NewIdea {
        title: title.to_string(),
        description: description.to_string(),
    })
}
