//! Pure mapping from a record to a render-ready view model.
//!
//! [`project`] never reads the clock or any global state, so equal inputs
//! always produce equal view models.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Locale, RecordKind, ReviewAction};
use crate::ids::RecordId;
use crate::record::{Reviewable, WorkflowStatus};
use crate::rules::can_transition;

const FR_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display settings for a projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    pub locale: Locale,
    /// Offset applied to timestamps before formatting.
    pub utc_offset_minutes: i32,
}

impl ProjectionOptions {
    fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

/// Everything a renderer needs to draw one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub id: RecordId,
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub status: String,
    pub badge_label: String,
    pub badge_class: String,
    pub badge_color: String,
    pub badge_background: String,
    pub badge_icon: String,
    pub formatted_created_at: String,
    pub formatted_scheduled_for: Option<String>,
    pub media_ref: Option<String>,
    pub available_actions: Vec<ReviewAction>,
}

/// Project a record into its view model.
#[must_use]
pub fn project<R: Reviewable>(record: &R, options: &ProjectionOptions) -> ViewModel {
    let status = record.status();
    let badge = status.badge();
    let offset = options.offset();

    let formatted_created_at = match R::KIND {
        RecordKind::Idea => format_date(record.created_at(), options.locale, offset),
        RecordKind::Video => format_date_time(record.created_at(), options.locale, offset),
    };

    ViewModel {
        id: record.id().clone(),
        kind: R::KIND,
        title: record.title().to_string(),
        description: record.description().to_string(),
        status: status.as_str().to_string(),
        badge_label: badge.label(options.locale).to_string(),
        badge_class: badge.class.to_string(),
        badge_color: badge.color.to_string(),
        badge_background: badge.background.to_string(),
        badge_icon: badge.icon.to_string(),
        formatted_created_at,
        formatted_scheduled_for: record
            .scheduled_for()
            .map(|when| format_date_time(when, options.locale, offset)),
        media_ref: record.media_ref().map(str::to_string),
        available_actions: available_actions(status),
    }
}

/// Actions whose edge exists out of `status`, in display order.
#[must_use]
pub fn available_actions<S: WorkflowStatus>(status: S) -> Vec<ReviewAction> {
    ReviewAction::ALL
        .into_iter()
        .filter(|action| can_transition(status, *action))
        .collect()
}

/// `04/07/2025` (fr) or `07/04/2025` (en).
#[must_use]
pub fn format_date(at: DateTime<Utc>, locale: Locale, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    match locale {
        Locale::Fr => format!("{:02}/{:02}/{}", local.day(), local.month(), local.year()),
        Locale::En => format!("{:02}/{:02}/{}", local.month(), local.day(), local.year()),
    }
}

/// `4 juil. 2025, 10:30` (fr) or `Jul 4, 2025, 10:30` (en).
#[must_use]
pub fn format_date_time(at: DateTime<Utc>, locale: Locale, offset: FixedOffset) -> String {
    let local = at.with_timezone(&offset);
    let month = local.month0() as usize;
    match locale {
        Locale::Fr => format!(
            "{} {} {}, {:02}:{:02}",
            local.day(),
            FR_MONTHS[month],
            local.year(),
            local.hour(),
            local.minute()
        ),
        Locale::En => format!(
            "{} {}, {}, {:02}:{:02}",
            EN_MONTHS[month],
            local.day(),
            local.year(),
            local.hour(),
            local.minute()
        ),
    }
}
