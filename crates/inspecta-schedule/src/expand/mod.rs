//! Expansion of timeline items into dated events for a display window.

mod clock;
mod occurrence;
mod status;
mod timeline;
mod window;

use chrono::DateTime;
use chrono_tz::Tz;

pub use clock::{Clock, FixedClock, SystemClock};
pub use occurrence::occurrence_dates;
pub use status::StatusType;
pub use timeline::TimeLine;
pub use window::DisplayWindow;

use crate::calendar::WeekCalendar;
use crate::marked::MarkedDates;
use crate::normalize::TimelineItem;

/// ## Summary
/// Expands every item over `window`, classifying each event against `now`
/// and marking its day in the calendar index.
///
/// Events are ordered by item, then chronologically. Items whose rule cannot
/// be built and occurrences that land in a DST gap are left out.
#[must_use]
pub fn expand(items: &[TimelineItem], window: &DisplayWindow, now: DateTime<Tz>) -> WeekCalendar {
    let tz = window.timezone();
    let mut timeline = Vec::new();
    let mut marked_dates = MarkedDates::new();

    for item in items {
        let dates = match occurrence_dates(item.date, window) {
            Ok(dates) => dates,
            Err(err) => {
                tracing::warn!(schedule_id = %item.schedule_id, error = %err, "Skipping timeline item");
                continue;
            }
        };

        for date in dates {
            let Some(event) = TimeLine::materialize(item, date, tz, now) else {
                continue;
            };
            marked_dates.mark(event.date(), event.kind);
            timeline.push(event);
        }
    }

    tracing::debug!(
        items = items.len(),
        events = timeline.len(),
        marked_days = marked_dates.len(),
        "Expanded timeline"
    );

    WeekCalendar {
        window: *window,
        timeline,
        marked_dates,
    }
}
