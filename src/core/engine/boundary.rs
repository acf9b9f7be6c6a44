use super::activity::is_work_day;
use crate::models::{Boundary, Configuration, DayMarkers};
use crate::utils::time::truncate_to_minute;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryOutcome {
    pub fires: bool,
    pub markers: DayMarkers,
}

/// Edge-triggered work-start / work-end event.
///
/// Fires only during the exact boundary minute and only once per calendar
/// date. A caller that does not look at that minute misses the event for the
/// day; there is no backfill.
pub fn evaluate_day_boundary(
    config: &Configuration,
    markers: DayMarkers,
    now: NaiveDateTime,
    which: Boundary,
) -> BoundaryOutcome {
    let boundary = match which {
        Boundary::Start => config.start_time,
        Boundary::End => config.end_time,
    };

    let today = now.date();
    let fires = config.enabled
        && is_work_day(config, now)
        && truncate_to_minute(now.time()) == truncate_to_minute(boundary)
        && !markers.has_fired_on(which, today);

    let markers = if fires {
        markers.with_fired(which, today)
    } else {
        markers
    };

    BoundaryOutcome { fires, markers }
}
