use chrono::{NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    WorkStart,
    LunchStart,
    LunchEnd,
    WorkEnd,
    StandUp,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::WorkStart => "Work Starts",
            EntryKind::LunchStart => "Lunch Time",
            EntryKind::LunchEnd => "Back to Work",
            EntryKind::WorkEnd => "Work Ends",
            EntryKind::StandUp => "Stand Up Break",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntryKind::WorkStart => "🐕",
            EntryKind::LunchStart => "🍖",
            EntryKind::LunchEnd => "💼",
            EntryKind::WorkEnd => "🎉",
            EntryKind::StandUp => "🧘",
        }
    }

    pub fn is_anchor(&self) -> bool {
        !matches!(self, EntryKind::StandUp)
    }
}

fn serialize_hhmm<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.format("%H:%M").to_string())
}

/// One row of the daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: NaiveTime,
    pub kind: EntryKind,
    pub label: &'static str,
}

impl ScheduleEntry {
    pub fn new(time: NaiveTime, kind: EntryKind) -> Self {
        Self {
            time,
            kind,
            label: kind.label(),
        }
    }
}

/// Result of one engine evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDecision {
    pub next_reminder: Option<NaiveDateTime>,
    pub is_active: bool,
    pub is_work_day: bool,
    pub schedule: Vec<ScheduleEntry>,
}
