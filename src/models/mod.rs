pub mod boundary;
pub mod configuration;
pub mod day_markers;
pub mod mood;
pub mod notification;
pub mod schedule;

pub use boundary::Boundary;
pub use configuration::{Configuration, WorkDays};
pub use day_markers::DayMarkers;
pub use mood::Mood;
pub use notification::Notification;
pub use schedule::{EntryKind, ScheduleDecision, ScheduleEntry};
