pub mod dispatch;
pub mod ideas;
pub mod shared;
pub mod videos;

use serde::Serialize;
use vet_workflow::PanelView;

/// What one invocation prints: the panel after the action, plus a one-line
/// notice when the action succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct PanelReport {
    pub notice: Option<String>,
    pub panel: PanelView,
}
