//! Dates on which a recurrence falls inside a display window.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Weekday};
use rrule::{RRule, Unvalidated};

use super::window::DisplayWindow;
use crate::error::{ScheduleError, ScheduleResult};
use crate::recurrence::Recurrence;

/// ## Summary
/// Lists the dates of `recurrence` within `window`, in chronological order.
///
/// Daily and weekly recurrences are materialized from an RRULE over the
/// window's calendar dates. The rule runs on UTC midnights so a local midnight
/// lost to a DST gap does not drop its day. A custom date is re-anchored onto
/// each year the window touches; when the window spans New Year only the
/// anchor nearest the window is kept.
///
/// ## Errors
/// Returns `ScheduleError::RecurrenceError` if the rule cannot be built.
pub fn occurrence_dates(
    recurrence: Recurrence,
    window: &DisplayWindow,
) -> ScheduleResult<Vec<NaiveDate>> {
    match recurrence {
        Recurrence::Daily => rule_dates("FREQ=DAILY", window),
        Recurrence::Weekly(day) => {
            let rule_text = format!("FREQ=WEEKLY;BYDAY={}", byday(day));
            let mut dates = rule_dates(&rule_text, window)?;
            dates.retain(|date| date.weekday() == day);
            Ok(dates)
        }
        Recurrence::Custom(date) => Ok(annual_dates(date, window)),
    }
}

fn rule_dates(rule_text: &str, window: &DisplayWindow) -> ScheduleResult<Vec<NaiveDate>> {
    let tz = rrule::Tz::Tz(chrono_tz::UTC);
    let at_midnight = |date: NaiveDate| date.and_time(NaiveTime::MIN).and_utc().with_timezone(&tz);
    let after_last = window.last_date() + Days::new(1);

    let rrule = rule_text
        .parse::<RRule<Unvalidated>>()
        .map_err(|err| ScheduleError::RecurrenceError(err.to_string()))?;
    let rrule_set = rrule
        .build(at_midnight(window.first_date()))
        .map_err(|err| ScheduleError::RecurrenceError(err.to_string()))?
        .before(at_midnight(after_last));

    let limit = u16::try_from(window.day_count() + 1).unwrap_or(u16::MAX);
    let occurrences = rrule_set.all(limit);
    tracing::trace!(
        rule = rule_text,
        count = occurrences.dates.len(),
        "Expanded recurrence rule"
    );

    Ok(occurrences
        .dates
        .iter()
        .map(DateTime::date_naive)
        .filter(|date| window.contains_date(*date))
        .collect())
}

fn annual_dates(date: NaiveDate, window: &DisplayWindow) -> Vec<NaiveDate> {
    (window.first_date().year()..=window.last_date().year())
        .filter_map(|year| date.with_year(year))
        .min_by_key(|anchored| days_outside(window, *anchored))
        .into_iter()
        .collect()
}

/// Whole days between `date` and the nearest edge of the window, zero inside it.
fn days_outside(window: &DisplayWindow, date: NaiveDate) -> i64 {
    if date < window.first_date() {
        (window.first_date() - date).num_days()
    } else if date > window.last_date() {
        (date - window.last_date()).num_days()
    } else {
        0
    }
}

const fn byday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn week_of(y: i32, m: u32, d: u32, tz: Tz) -> DisplayWindow {
        let now = tz.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        DisplayWindow::week_containing(now, Weekday::Sun)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_log::test]
    fn test_daily_covers_every_day() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Daily, &window).unwrap();

        let expected: Vec<NaiveDate> = (11..=17).map(|d| date(2026, 10, d)).collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_weekly_falls_once() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Weekly(Weekday::Mon), &window).unwrap();
        assert_eq!(dates, vec![date(2026, 10, 12)]);
    }

    #[test]
    fn test_weekly_on_window_start_day() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Weekly(Weekday::Sun), &window).unwrap();
        assert_eq!(dates, vec![date(2026, 10, 11)]);
    }

    #[test]
    fn test_daily_over_dst_change() {
        // Europe/Berlin leaves summer time on 2026-10-25.
        let window = week_of(2026, 10, 27, chrono_tz::Europe::Berlin);
        let dates = occurrence_dates(Recurrence::Daily, &window).unwrap();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2026, 10, 25));
    }

    #[test]
    fn test_custom_inside_window() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Custom(date(2026, 10, 16)), &window).unwrap();
        assert_eq!(dates, vec![date(2026, 10, 16)]);
    }

    #[test]
    fn test_custom_reanchors_year() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Custom(date(2021, 10, 14)), &window).unwrap();
        assert_eq!(dates, vec![date(2026, 10, 14)]);
    }

    #[test]
    fn test_custom_outside_window_still_emits() {
        let window = week_of(2026, 10, 15, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Custom(date(2026, 11, 2)), &window).unwrap();
        assert_eq!(dates, vec![date(2026, 11, 2)]);
    }

    #[test]
    fn test_custom_across_year_boundary_emits_once() {
        let window = week_of(2026, 12, 31, chrono_tz::UTC);
        assert_eq!(
            occurrence_dates(Recurrence::Custom(date(2020, 1, 1)), &window).unwrap(),
            vec![date(2027, 1, 1)]
        );
        assert_eq!(
            occurrence_dates(Recurrence::Custom(date(2020, 12, 28)), &window).unwrap(),
            vec![date(2026, 12, 28)]
        );
        // Neither anchor is inside; 2027-06-15 is the closer one.
        assert_eq!(
            occurrence_dates(Recurrence::Custom(date(2020, 6, 15)), &window).unwrap(),
            vec![date(2027, 6, 15)]
        );
    }

    #[test]
    fn test_daily_and_weekly_keep_day_without_midnight() {
        // America/Santiago skips 00:00-01:00 on Sunday 2026-09-06.
        let now = chrono_tz::America::Santiago
            .with_ymd_and_hms(2026, 9, 2, 12, 0, 0)
            .unwrap();
        let window = DisplayWindow::week_containing(now, Weekday::Mon);

        let daily = occurrence_dates(Recurrence::Daily, &window).unwrap();
        let expected: Vec<NaiveDate> = (0..7).map(|d| date(2026, 8, 31) + Days::new(d)).collect();
        assert_eq!(daily, expected);

        let sunday = occurrence_dates(Recurrence::Weekly(Weekday::Sun), &window).unwrap();
        assert_eq!(sunday, vec![date(2026, 9, 6)]);
    }

    #[test]
    fn test_custom_leap_day_skipped_in_common_year() {
        // 2027-02-28 is a Sunday; the week runs to 2027-03-06.
        let window = week_of(2027, 3, 1, chrono_tz::UTC);
        let dates = occurrence_dates(Recurrence::Custom(date(2024, 2, 29)), &window).unwrap();
        assert!(dates.is_empty());
    }
}
