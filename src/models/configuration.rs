use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_index;
use chrono::{Duration, NaiveDate, NaiveTime};
use std::collections::BTreeSet;
use std::num::NonZeroU32;

/// Set of enabled weekdays, 0 = Sunday .. 6 = Saturday.
///
/// Any subset is valid, including the empty set (no work days at all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkDays(BTreeSet<u8>);

impl WorkDays {
    /// Build from settings indices. Indices above 6 are rejected.
    pub fn from_indices<I: IntoIterator<Item = u8>>(days: I) -> AppResult<Self> {
        let mut set = BTreeSet::new();
        for d in days {
            if d > 6 {
                return Err(AppError::InvalidConfiguration(format!(
                    "work day {} out of range (0=Sunday .. 6=Saturday)",
                    d
                )));
            }
            set.insert(d);
        }
        Ok(Self(set))
    }

    /// Monday to Friday.
    pub fn weekdays() -> Self {
        Self((1..=5).collect())
    }

    pub fn contains(&self, idx: u8) -> bool {
        self.0.contains(&idx)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(weekday_index(date))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validated schedule boundaries handed to the engine.
///
/// Boundary ordering is *not* enforced: out-of-order windows produce
/// degenerate schedules instead of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub enabled: bool,
    pub work_days: WorkDays,
    pub start_time: NaiveTime,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
    pub end_time: NaiveTime,
    pub interval: NonZeroU32,
}

impl Configuration {
    pub fn new(
        enabled: bool,
        work_days: WorkDays,
        start_time: NaiveTime,
        lunch_start: NaiveTime,
        lunch_end: NaiveTime,
        end_time: NaiveTime,
        interval_minutes: u32,
    ) -> AppResult<Self> {
        let interval = NonZeroU32::new(interval_minutes).ok_or_else(|| {
            AppError::InvalidConfiguration("interval_minutes must be a positive integer".into())
        })?;

        Ok(Self {
            enabled,
            work_days,
            start_time,
            lunch_start,
            lunch_end,
            end_time,
            interval,
        })
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval.get()
    }

    pub fn interval_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.interval.get()))
    }

    /// `start < lunch_start < lunch_end < end`
    pub fn has_ordered_boundaries(&self) -> bool {
        self.start_time < self.lunch_start
            && self.lunch_start < self.lunch_end
            && self.lunch_end < self.end_time
    }
}
