//! Schedule engine: pure functions of `(Configuration, now)`.
//!
//! Nothing here reads a clock or keeps state between calls. The only state
//! that crosses calls is `DayMarkers`, which callers pass in and get back.

pub mod activity;
pub mod boundary;
pub mod daily_schedule;
pub mod reminder;

pub use activity::{is_active_now, is_work_day};
pub use boundary::{BoundaryOutcome, evaluate_day_boundary};
pub use daily_schedule::build_daily_schedule;
pub use reminder::next_reminder;

use crate::models::{Configuration, ScheduleDecision};
use chrono::NaiveDateTime;

pub struct Engine;

impl Engine {
    pub fn evaluate(config: &Configuration, now: NaiveDateTime) -> ScheduleDecision {
        let decision = ScheduleDecision {
            next_reminder: next_reminder(config, now),
            is_active: is_active_now(config, now),
            is_work_day: is_work_day(config, now),
            schedule: build_daily_schedule(config),
        };

        log::trace!(
            "evaluate at {}: work_day={} active={} next={:?}",
            now,
            decision.is_work_day,
            decision.is_active,
            decision.next_reminder
        );

        decision
    }
}
