use crate::errors::AppResult;
use crate::utils::time::parse_instant;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Wall-clock "now" in local time. Only the CLI calls this; the engine
/// always receives the instant as an argument.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Weekday index as stored in the settings: 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub fn weekday_from_index(idx: u8) -> Option<Weekday> {
    match idx {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn short_weekday(idx: u8) -> &'static str {
    match weekday_from_index(idx) {
        Some(Weekday::Sun) => "Sun",
        Some(Weekday::Mon) => "Mon",
        Some(Weekday::Tue) => "Tue",
        Some(Weekday::Wed) => "Wed",
        Some(Weekday::Thu) => "Thu",
        Some(Weekday::Fri) => "Fri",
        Some(Weekday::Sat) => "Sat",
        None => "?",
    }
}

/// Injected instant from `--at`, or the wall clock.
pub fn now_or(at: Option<&str>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_instant(s),
        None => Ok(now()),
    }
}
