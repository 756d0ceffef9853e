//! Display settings shared by both panels.

use serde::{Deserialize, Serialize};
use vet_core::enums::Locale;
use vet_core::projection::ProjectionOptions;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Language for badges, dates and action labels.
    #[serde(default)]
    pub locale: Locale,

    /// Offset applied to timestamps before formatting, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl DisplayConfig {
    #[must_use]
    pub const fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            locale: self.locale,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}
