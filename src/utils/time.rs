//! Time utilities: parsing HH:MM, parsing injected instants, countdown texts.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Parse an `HH:MM` string, reporting the offending value on failure.
pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Drop seconds and sub-seconds: boundary events compare at minute granularity.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Parse the `--at` override used to inject "now" from the command line.
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    INSTANT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

/// Human countdown towards a reminder.
///
/// `diff <= 0` → "Time to stand up!", otherwise the two most significant
/// units ("in 1h 5m", "in 4m 10s", "in 9s").
pub fn format_countdown(diff: Duration) -> String {
    if diff <= Duration::zero() {
        return "Time to stand up!".to_string();
    }

    let total = diff.num_seconds();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("in {}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("in {}m {}s", minutes, seconds)
    } else {
        format!("in {}s", seconds)
    }
}
