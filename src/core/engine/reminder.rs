use super::activity::is_work_day;
use crate::models::Configuration;
use chrono::NaiveDateTime;

/// Next stand-up reminder for the day of `now`, or `None` when nothing is
/// left to fire today.
///
/// Reminders are phase-locked to `start_time`: the candidate walks forward
/// from the work start in whole intervals until it is strictly after `now`.
/// A candidate landing in the lunch window is moved once to `lunch_end`,
/// which resets the cadence after lunch.
pub fn next_reminder(config: &Configuration, now: NaiveDateTime) -> Option<NaiveDateTime> {
    if !config.enabled || !is_work_day(config, now) {
        return None;
    }

    let day = now.date();
    let start_of_work = day.and_time(config.start_time);
    let end_of_work = day.and_time(config.end_time);

    if now < start_of_work {
        return Some(start_of_work);
    }

    if now >= end_of_work {
        return None;
    }

    let step = config.interval_duration();
    let mut candidate = start_of_work;
    while candidate <= now {
        candidate = candidate.checked_add_signed(step)?;
    }

    let lunch_start = day.and_time(config.lunch_start);
    let lunch_end = day.and_time(config.lunch_end);
    if candidate >= lunch_start && candidate < lunch_end {
        candidate = lunch_end;
    }

    if candidate >= end_of_work {
        return None;
    }

    Some(candidate)
}
