use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_").to_ascii_lowercase();
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse `--at`: RFC 3339, or a bare `YYYY-MM-DDTHH:MM` read in the display offset.
pub fn parse_schedule_time(raw: &str, utc_offset_minutes: i32) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map_err(|error| {
        anyhow::anyhow!(
            "invalid schedule time '{raw}': expected RFC 3339 or YYYY-MM-DDTHH:MM ({error})"
        )
    })?;
    let offset = utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .with_context(|| format!("utc_offset_minutes {utc_offset_minutes} is out of range"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|at| at.with_timezone(&Utc))
        .with_context(|| format!("schedule time '{raw}' is ambiguous"))
}
