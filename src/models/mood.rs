use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Active,
    Paused,
    Weekend,
}

impl Mood {
    /// Paused wins over weekend: a disabled app is paused on any day.
    pub fn from_state(enabled: bool, is_work_day: bool) -> Self {
        if !enabled {
            Mood::Paused
        } else if !is_work_day {
            Mood::Weekend
        } else {
            Mood::Active
        }
    }
}
