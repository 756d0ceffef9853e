//! # vet-core
//!
//! Core types for the vet review console.
//!
//! This crate holds everything the review workflow needs that does not touch
//! the network:
//! - Record structs for ideas and videos
//! - Status enums with state machine transitions
//! - The opaque record identifier
//! - The review error taxonomy
//! - Transition rules (graph checks plus schedule side-data validation)
//! - Status badge descriptors and the pure view projection

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod palette;
pub mod projection;
pub mod record;
pub mod rules;
