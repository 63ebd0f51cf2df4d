use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Daily time window during which a restriction is enforced.
///
/// A window whose `end` does not come after its `start` wraps past
/// midnight, so `22:00-06:00` covers late evening and early morning.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        TimeWindow { start, end }
    }

    /// Whether `time` falls inside the window, boundaries included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start < self.end {
            time >= self.start && time <= self.end
        } else {
            // Overnight wraparound
            time >= self.start || time <= self.end
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
