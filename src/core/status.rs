//! Display-facing view of a schedule decision: status indicator, next
//! reminder label, countdown, current schedule entry and mascot message.

use crate::models::{Configuration, Mood, ScheduleDecision, ScheduleEntry};
use crate::utils::time::{format_countdown, format_hhmm, truncate_to_minute};
use chrono::{NaiveDateTime, NaiveTime};
use rand::Rng;
use serde::Serialize;

const ACTIVE_MESSAGES: [&str; 4] = [
    "Ready to keep you healthy! 🐾",
    "Let's stay active together! 🐕",
    "I'll remind you to stretch! 🎾",
    "Your wellness buddy is here! 🦴",
];

const PAUSED_MESSAGES: [&str; 2] = ["Reminders are paused 😴", "Taking a break too! 🛌"];

const WEEKEND_MESSAGES: [&str; 3] = [
    "Enjoy your weekend! 🎉",
    "Rest and relax! 🌟",
    "See you on Monday! 🐾",
];

pub const NO_TIME: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Indicator {
    Active,
    Weekend,
    Paused,
}

impl Indicator {
    /// Weekend wins over paused here, unlike `Mood`.
    pub fn from_state(enabled: bool, is_work_day: bool) -> Self {
        if enabled && is_work_day {
            Indicator::Active
        } else if !is_work_day {
            Indicator::Weekend
        } else {
            Indicator::Paused
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::Active => "Active",
            Indicator::Weekend => "Weekend",
            Indicator::Paused => "Paused",
        }
    }
}

pub fn messages_for(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Active => &ACTIVE_MESSAGES,
        Mood::Paused => &PAUSED_MESSAGES,
        Mood::Weekend => &WEEKEND_MESSAGES,
    }
}

/// Message at `idx` (wrapped) in the list for `mood`.
pub fn message_at(mood: Mood, idx: usize) -> &'static str {
    let list = messages_for(mood);
    list[idx % list.len()]
}

pub fn mascot_message<R: Rng + ?Sized>(mood: Mood, rng: &mut R) -> &'static str {
    let len = messages_for(mood).len();
    message_at(mood, rng.random_range(0..len))
}

/// Index of the schedule entry the user is currently in.
///
/// An entry is current from its own time up to (excluding) the time of the
/// entry following the first one at that time; the last entry runs until
/// 23:59. Entries sharing a time therefore get an empty window and are never
/// current. Nothing is current off work days.
pub fn current_entry_index(
    schedule: &[ScheduleEntry],
    is_work_day: bool,
    now: NaiveDateTime,
) -> Option<usize> {
    if !is_work_day {
        return None;
    }

    let current = truncate_to_minute(now.time());
    let day_end = NaiveTime::from_hms_opt(23, 59, 0)?;

    schedule.iter().enumerate().find_map(|(i, entry)| {
        let first = schedule
            .iter()
            .position(|e| e.time == entry.time)
            .unwrap_or(i);
        let until = schedule.get(first + 1).map(|e| e.time).unwrap_or(day_end);
        (current >= entry.time && current < until).then_some(i)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub indicator: Indicator,
    pub mood: Mood,
    pub next_label: String,
    pub countdown: String,
    pub current_entry: Option<ScheduleEntry>,
    pub mascot: &'static str,
    pub decision: ScheduleDecision,
}

impl StatusView {
    pub fn build<R: Rng + ?Sized>(
        config: &Configuration,
        decision: ScheduleDecision,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Self {
        let indicator = Indicator::from_state(config.enabled, decision.is_work_day);
        let mood = Mood::from_state(config.enabled, decision.is_work_day);
        let (next_label, countdown) = next_reminder_texts(config, &decision, now);
        let current_entry = current_entry_index(&decision.schedule, decision.is_work_day, now)
            .and_then(|i| decision.schedule.get(i).cloned());

        Self {
            indicator,
            mood,
            next_label,
            countdown,
            current_entry,
            mascot: mascot_message(mood, rng),
            decision,
        }
    }
}

/// Label and caption for the "next reminder" card.
///
/// With no reminder left, an enabled work day still before `end_time` shows
/// the upcoming work-end notification instead.
pub fn next_reminder_texts(
    config: &Configuration,
    decision: &ScheduleDecision,
    now: NaiveDateTime,
) -> (String, String) {
    if let Some(next) = decision.next_reminder {
        return (format_hhmm(next.time()), format_countdown(next - now));
    }

    let current = truncate_to_minute(now.time());
    if decision.is_work_day && config.enabled && current < config.end_time {
        (
            format_hhmm(config.end_time),
            "Work end notification".to_string(),
        )
    } else if decision.is_work_day {
        (NO_TIME.to_string(), "No more reminders today".to_string())
    } else {
        (NO_TIME.to_string(), "Enjoy your weekend!".to_string())
    }
}
