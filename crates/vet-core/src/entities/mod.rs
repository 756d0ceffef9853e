//! Record structs for the two review panels.
//!
//! Field names follow the backend wire format (`created_at`, `file_path`,
//! `scheduled_time`). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod idea;
mod video;

pub use idea::{Idea, NewIdea};
pub use video::{ScheduleRequest, Video};
