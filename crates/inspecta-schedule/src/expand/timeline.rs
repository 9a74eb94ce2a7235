use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use inspecta_core::types::ScheduleKind;
use serde::Serialize;

use super::status::StatusType;
use crate::model::ScheduleId;
use crate::normalize::TimelineItem;
use crate::palette;

/// A concrete, dated calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLine {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: ScheduleId,
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub summary: String,
    pub color: &'static str,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub status: bool,
    #[serde(rename = "statustype")]
    pub status_type: StatusType,
}

impl TimeLine {
    /// ## Summary
    /// Places `item` on `date` in timezone `tz` and classifies it against `now`.
    ///
    /// A slot whose end is before its start finishes on the following day.
    /// Returns `None` if a bound names a local time that does not exist (DST gap).
    #[must_use]
    pub fn materialize(item: &TimelineItem, date: NaiveDate, tz: Tz, now: DateTime<Tz>) -> Option<Self> {
        let end_date = if item.time.crosses_midnight() {
            date.checked_add_days(Days::new(1))?
        } else {
            date
        };

        let start = localize(tz, date.and_time(item.time.start))?;
        let end = localize(tz, end_date.and_time(item.time.end))?;
        let kind = item.date.kind();

        Some(Self {
            schedule_id: item.schedule_id.clone(),
            title: item.name.clone(),
            start,
            end,
            summary: item.time.to_string(),
            color: palette::colors(kind).color,
            kind,
            status: item.status,
            status_type: StatusType::classify(item.status, now, start, end),
        })
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

fn localize(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    let resolved = tz.from_local_datetime(&local).earliest();
    if resolved.is_none() {
        tracing::debug!(%local, timezone = %tz, "Local time does not exist (DST gap)");
    }
    resolved
}
