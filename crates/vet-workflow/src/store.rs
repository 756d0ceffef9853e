//! Workflow State Store: records, busy flag and last error for one panel.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};
use vet_core::errors::ReviewError;
use vet_core::ids::RecordId;
use vet_core::record::{Reviewable, WorkflowStatus};

/// A broken store invariant, reported by [`WorkflowStore::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("duplicate record id {0}")]
    DuplicateId(RecordId),

    #[error("record {id} has status {status} but has_scheduled_time = {has_time}")]
    ScheduleMismatch {
        id: RecordId,
        status: String,
        has_time: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowStore<R> {
    records: Vec<R>,
    busy: bool,
    error: Option<ReviewError>,
}

impl<R> Default for WorkflowStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            busy: false,
            error: None,
        }
    }
}

impl<R: Reviewable> WorkflowStore<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub const fn busy(&self) -> bool {
        self.busy
    }

    /// Message of the last failure, if the latest operation failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&ReviewError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn begin_operation(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Replace the collection wholesale.
    ///
    /// A repeated id keeps its first occurrence.
    pub fn on_list_success(&mut self, records: Vec<R>) {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id().clone()) {
                kept.push(record);
            } else {
                warn!(kind = %R::KIND, id = %record.id(), "dropping duplicate id from list");
            }
        }
        debug!(kind = %R::KIND, count = kept.len(), "list applied");
        self.records = kept;
        self.busy = false;
    }

    /// Replace the record with the same id in place.
    ///
    /// Returns `false`, leaving the collection untouched, when no record
    /// matches.
    pub fn on_mutation_success(&mut self, updated: R) -> bool {
        self.busy = false;
        let Some(slot) = self.records.iter_mut().find(|r| r.id() == updated.id()) else {
            debug!(kind = %R::KIND, id = %updated.id(), "mutation for unknown id dropped");
            return false;
        };
        *slot = updated;
        true
    }

    /// Append a newly created record, or replace it if the id is already held.
    pub fn on_created(&mut self, record: R) {
        self.busy = false;
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Record the failure; the collection is left as it was.
    pub fn on_failure(&mut self, err: &ReviewError) {
        self.error = Some(err.clone());
        self.busy = false;
    }

    /// Verify id uniqueness and that `scheduled_for` is set exactly when
    /// the status is scheduled.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if !seen.insert(record.id()) {
                return Err(InvariantViolation::DuplicateId(record.id().clone()));
            }
            if !record.schedule_consistent() {
                return Err(InvariantViolation::ScheduleMismatch {
                    id: record.id().clone(),
                    status: record.status().as_str().to_string(),
                    has_time: record.scheduled_for().is_some(),
                });
            }
        }
        Ok(())
    }
}
