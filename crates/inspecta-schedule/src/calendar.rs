use chrono::Weekday;
use serde::Serialize;

use crate::expand::{Clock, DisplayWindow, TimeLine, expand};
use crate::marked::MarkedDates;
use crate::model::ScheduleRecord;
use crate::normalize::normalize;

/// Result of one expansion pass over a display window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekCalendar {
    pub window: DisplayWindow,
    pub timeline: Vec<TimeLine>,
    #[serde(rename = "markedDates")]
    pub marked_dates: MarkedDates,
}

/// ## Summary
/// Builds the calendar for the week containing `clock.now()`.
///
/// Normalizes `records`, derives the week window from the clock's instant and
/// timezone, then expands. Malformed entries are dropped, never reported.
#[must_use]
pub fn build_week_calendar(
    records: &[ScheduleRecord],
    clock: &impl Clock,
    week_start: Weekday,
) -> WeekCalendar {
    let now = clock.now();
    let window = DisplayWindow::week_containing(now, week_start);
    tracing::debug!(
        records = records.len(),
        window_start = %window.start,
        window_end = %window.end,
        "Building week calendar"
    );

    let items = normalize(records);
    expand(&items, &window, now)
}
