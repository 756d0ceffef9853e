//! Review error taxonomy shared by the gateway, store and controller.
//!
//! Every failure a panel can show belongs to one of four kinds. Validation
//! and transition errors are raised before any request leaves the process;
//! network and not-found errors come back from the backend.

use thiserror::Error;

use crate::enums::{RecordKind, ReviewAction};
use crate::ids::RecordId;

/// Errors surfaced by a review operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Input rejected locally (empty required field, non-future schedule time).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-success response, transport failure, or an undecodable body.
    #[error("Network error during {operation}: {message}")]
    Network {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    /// The backend (or the local collection) does not know the record.
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: RecordId },

    /// The action is not an edge of the record's status graph.
    #[error("Invalid transition: cannot {action} {kind} {id} from {from}")]
    InvalidTransition {
        kind: RecordKind,
        id: RecordId,
        from: String,
        action: ReviewAction,
    },
}

/// Discriminant of [`ReviewError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Network,
    NotFound,
    InvalidTransition,
}

impl ReviewError {
    /// Build a [`ReviewError::Network`] without an HTTP status.
    pub fn network(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            operation: operation.into(),
            status: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Network { .. } => ErrorKind::Network,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            ReviewError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ReviewError::network("list", "boom").kind(),
            ErrorKind::Network
        );
        let not_found = ReviewError::NotFound {
            kind: RecordKind::Idea,
            id: RecordId::from("9"),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn messages_are_human_readable() {
        let err = ReviewError::InvalidTransition {
            kind: RecordKind::Video,
            id: RecordId::from("4"),
            from: "rejected".into(),
            action: ReviewAction::Approve,
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot approve video 4 from rejected"
        );

        let err = ReviewError::Network {
            operation: "list videos".into(),
            status: Some(503),
            message: "service unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Network error during list videos: service unavailable"
        );
    }
}
