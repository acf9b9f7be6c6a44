use crate::models::Configuration;
use crate::utils::time::truncate_to_minute;
use chrono::NaiveDateTime;

pub fn is_work_day(config: &Configuration, now: NaiveDateTime) -> bool {
    config.work_days.contains_date(now.date())
}

/// Inside `[start, end)` and outside `[lunch_start, lunch_end)` on an
/// enabled work day.
pub fn is_active_now(config: &Configuration, now: NaiveDateTime) -> bool {
    if !config.enabled || !is_work_day(config, now) {
        return false;
    }

    let t = truncate_to_minute(now.time());

    if t < config.start_time || t >= config.end_time {
        return false;
    }

    if t >= config.lunch_start && t < config.lunch_end {
        return false;
    }

    true
}
