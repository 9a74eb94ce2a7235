//! The display window an expansion pass covers.

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Weekday,
};
use chrono_tz::Tz;
use serde::Serialize;

/// Inclusive range of instants shown by the calendar, normally one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DisplayWindow {
    #[must_use]
    pub const fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// Returns the calendar week containing `now`, in `now`'s timezone.
    ///
    /// The window starts at 00:00:00 of the most recent `week_start` day on or
    /// before `now` and ends at 23:59:59 six days later.
    #[must_use]
    pub fn week_containing(now: DateTime<Tz>, week_start: Weekday) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let offset = (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
        let first = today - Days::new(u64::from(offset));
        let last = first + Days::new(6);

        let start = localize_earliest(&tz, first.and_time(NaiveTime::MIN));
        let end = localize_latest(&tz, last.and_time(NaiveTime::MIN) + TimeDelta::seconds(86_399));
        Self { start, end }
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.start.timezone()
    }

    #[must_use]
    pub fn first_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    #[must_use]
    pub fn last_date(&self) -> NaiveDate {
        self.end.date_naive()
    }

    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.first_date() <= date && date <= self.last_date()
    }

    /// Number of calendar days touched by the window.
    #[must_use]
    pub fn day_count(&self) -> u64 {
        let span = (self.last_date() - self.first_date()).num_days();
        u64::try_from(span + 1).unwrap_or(0)
    }
}

/// Local midnight can fall into a DST gap; step forward an hour at a time.
fn localize_earliest(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = local;
    for _ in 0..3 {
        if let Some(dt) = tz.from_local_datetime(&candidate).earliest() {
            return dt;
        }
        candidate += TimeDelta::hours(1);
    }
    tz.from_utc_datetime(&local)
}

fn localize_latest(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = local;
    for _ in 0..3 {
        if let Some(dt) = tz.from_local_datetime(&candidate).latest() {
            return dt;
        }
        candidate -= TimeDelta::hours(1);
    }
    tz.from_utc_datetime(&local)
}
