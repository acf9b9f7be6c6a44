use super::boundary::Boundary;
use chrono::NaiveDate;

/// Session state of the driver: the last calendar date each boundary
/// event fired on. Compared by date equality, so it resets implicitly
/// when the date changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayMarkers {
    pub last_work_start_fired: Option<NaiveDate>,
    pub last_work_end_fired: Option<NaiveDate>,
}

impl DayMarkers {
    pub fn last_fired(&self, which: Boundary) -> Option<NaiveDate> {
        match which {
            Boundary::Start => self.last_work_start_fired,
            Boundary::End => self.last_work_end_fired,
        }
    }

    pub fn has_fired_on(&self, which: Boundary, date: NaiveDate) -> bool {
        self.last_fired(which) == Some(date)
    }

    /// Copy of the markers with `which` stamped with `date`.
    pub fn with_fired(mut self, which: Boundary, date: NaiveDate) -> Self {
        match which {
            Boundary::Start => self.last_work_start_fired = Some(date),
            Boundary::End => self.last_work_end_fired = Some(date),
        }
        self
    }
}
