use crate::models::{Configuration, EntryKind, ScheduleEntry};
use chrono::{NaiveTime, Timelike};

/// Full schedule for a work day: the four anchors plus every stand-up slot,
/// sorted by time of day. Entries sharing a time keep anchor-first order.
pub fn build_daily_schedule(config: &Configuration) -> Vec<ScheduleEntry> {
    let mut schedule = vec![
        ScheduleEntry::new(config.start_time, EntryKind::WorkStart),
        ScheduleEntry::new(config.lunch_start, EntryKind::LunchStart),
        ScheduleEntry::new(config.lunch_end, EntryKind::LunchEnd),
        ScheduleEntry::new(config.end_time, EntryKind::WorkEnd),
    ];

    schedule.extend(
        stand_up_slots(config)
            .into_iter()
            .map(|t| ScheduleEntry::new(t, EntryKind::StandUp)),
    );

    schedule.sort_by_key(|e| e.time);
    schedule
}

/// Stand-up slots at hour granularity.
///
/// Generation stops once the slot hour reaches the end hour. A slot whose
/// hour lies in `[lunch_start_hour, lunch_end_hour)` is not emitted; the
/// cursor jumps to `lunch_end` and keeps stepping from there.
fn stand_up_slots(config: &Configuration) -> Vec<NaiveTime> {
    let interval = config.interval_minutes();
    let end_hour = config.end_time.hour();
    let lunch_start_hour = config.lunch_start.hour();
    let lunch_end_hour = config.lunch_end.hour();

    let mut hour = config.start_time.hour();
    let mut minute = config.start_time.minute();
    let mut slots = Vec::new();

    // hour*60+minute strictly grows every iteration, so this terminates
    loop {
        minute = minute.saturating_add(interval);
        if minute >= 60 {
            hour = hour.saturating_add(minute / 60);
            minute %= 60;
        }

        if hour >= end_hour {
            break;
        }

        if hour >= lunch_start_hour && hour < lunch_end_hour {
            hour = lunch_end_hour;
            minute = config.lunch_end.minute();
            continue;
        }

        if let Some(t) = NaiveTime::from_hms_opt(hour, minute, 0) {
            slots.push(t);
        }
    }

    slots
}
