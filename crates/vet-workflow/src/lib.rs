//! # vet-workflow
//!
//! The Review Workflow Controller: a [`WorkflowStore`] holding one panel's
//! records, busy flag and error, driven by a [`ReviewController`] that runs
//! each operation through the gateway and applies the outcome.
//!
//! Outcomes are applied in the order responses arrive. Nothing serializes
//! overlapping operations; the busy flag is advisory.

mod controller;
mod panel;
mod store;

pub use controller::ReviewController;
pub use panel::{PanelView, panel_view};
pub use store::{InvariantViolation, WorkflowStore};
