//! Command implementations
//!
//! Each module corresponds to a subcommand of the `zoom` CLI and is shared
//! with the standalone per-operation binaries.

pub mod create;
pub mod delete;
pub mod info;
pub mod list;
pub mod update;

pub use create::CreateArgs;
pub use update::UpdateArgs;

use chrono::{DateTime, NaiveDateTime};

/// Zoom's local-time form: `2026-11-02T15:00:00`, interpreted in the
/// meeting's timezone.
const LOCAL_START_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accept RFC 3339 (`2026-11-02T15:00:00Z`) or Zoom local time.
/// Used as a clap value parser, so the input is returned unchanged.
pub fn parse_start_time(value: &str) -> Result<String, String> {
    let value = value.trim();
    if DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, LOCAL_START_FORMAT).is_ok()
    {
        Ok(value.to_string())
    } else {
        Err(format!(
            "'{}' is not a valid start time (expected e.g. 2026-11-02T15:00:00Z or 2026-11-02T15:00:00)",
            value
        ))
    }
}

/// Meeting length in whole minutes; zero is rejected.
pub fn parse_duration(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err("duration must be at least 1 minute".to_string()),
        Ok(minutes) => Ok(minutes),
        Err(_) => Err(format!("'{}' is not a number of minutes", value)),
    }
}
