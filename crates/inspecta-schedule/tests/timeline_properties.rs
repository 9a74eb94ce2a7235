//! Behavioural tests for the schedule → timeline pipeline.

use chrono::{DateTime, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;
use inspecta_core::types::ScheduleKind;
use inspecta_schedule::{
    DisplayWindow, FixedClock, ScheduleId, ScheduleRecord, StatusType, TimeSlot, build_week_calendar, expand,
    normalize,
};

const FIXTURE: &str = include_str!("data/schedules.json");

fn bangkok(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
    chrono_tz::Asia::Bangkok
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

/// Thursday 2026-10-15 10:30; the Sunday-based week is 11..=17 October.
fn now() -> DateTime<Tz> {
    bangkok(2026, 10, 15, 10, 30)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

fn fixture() -> Vec<ScheduleRecord> {
    serde_json::from_str(FIXTURE).expect("fixture parses")
}

#[test_log::test]
fn expansion_is_idempotent() {
    let records = fixture();
    let clock = FixedClock(now());

    let first = build_week_calendar(&records, &clock, Weekday::Sun);
    let second = build_week_calendar(&records, &clock, Weekday::Sun);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn daily_slot_covers_each_day_of_the_week() {
    let records = vec![ScheduleRecord::daily(1, "Daily", vec![TimeSlot::new("08:00", "09:00")])];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    assert_eq!(calendar.timeline.len(), 7);
    assert!(calendar.timeline.iter().all(|event| event.kind == ScheduleKind::Daily));
    let dates: Vec<NaiveDate> = calendar.timeline.iter().map(|event| event.date()).collect();
    assert_eq!(dates, (11..=17).map(day).collect::<Vec<_>>());
}

#[test]
fn weekly_slot_falls_once_on_its_day() {
    let records = vec![ScheduleRecord::weekly(
        2,
        "Weekly",
        [("Monday", vec![TimeSlot::new("10:00", "11:00")])],
    )];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    assert_eq!(calendar.timeline.len(), 1);
    let event = &calendar.timeline[0];
    assert_eq!(event.start, bangkok(2026, 10, 12, 10, 0));
    assert_eq!(event.end, bangkok(2026, 10, 12, 11, 0));
    assert_eq!(event.kind, ScheduleKind::Weekly);
}

#[test]
fn status_reflects_now_and_active_flag() {
    let records = fixture();
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    let status_on = |id: i64, date: NaiveDate| {
        calendar
            .timeline
            .iter()
            .find(|event| event.schedule_id == ScheduleId::Number(id) && event.date() == date)
            .map(|event| event.status_type)
    };

    // Thursday 10:00-11:00 conveyor inspection is under way at 10:30.
    assert_eq!(status_on(102, day(15)), Some(StatusType::Running));
    // Monday's run is over, Friday's audit has not started.
    assert_eq!(status_on(102, day(12)), Some(StatusType::End));
    assert_eq!(status_on(103, day(16)), Some(StatusType::Wait));
    // Inactive schedules are stopped even while in their slot's past.
    assert_eq!(status_on(104, day(15)), Some(StatusType::Stop));
    // Thursday 08:00-09:00 boiler check has ended.
    assert_eq!(status_on(101, day(15)), Some(StatusType::End));
}

#[test]
fn running_end_wait_stop_around_now() {
    let records = vec![
        ScheduleRecord::daily(1, "Running", vec![TimeSlot::new("09:30", "11:30")]),
        ScheduleRecord::daily(2, "Ended", vec![TimeSlot::new("08:00", "09:30")]),
        ScheduleRecord::daily(3, "Waiting", vec![TimeSlot::new("11:30", "12:30")]),
        ScheduleRecord::daily(4, "Stopped", vec![TimeSlot::new("09:30", "11:30")]).with_active(false),
    ];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    let today: Vec<(String, StatusType)> = calendar
        .timeline
        .iter()
        .filter(|event| event.date() == day(15))
        .map(|event| (event.title.clone(), event.status_type))
        .collect();

    assert_eq!(
        today,
        vec![
            ("Running".to_string(), StatusType::Running),
            ("Ended".to_string(), StatusType::End),
            ("Waiting".to_string(), StatusType::Wait),
            ("Stopped".to_string(), StatusType::Stop),
        ]
    );
}

#[test_log::test]
fn malformed_custom_date_is_dropped_silently() {
    let records = vec![ScheduleRecord::custom(
        9,
        "Broken",
        vec![TimeSlot::new("30-02-2026 09:00", "10:00")],
    )];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    assert!(calendar.timeline.is_empty());
    assert!(calendar.marked_dates.is_empty());
}

#[test]
fn markers_dedup_per_kind_and_day() {
    let records = vec![
        ScheduleRecord::weekly(1, "A", [("Tuesday", vec![TimeSlot::new("10:00", "11:00")])]),
        ScheduleRecord::weekly(2, "B", [("Tuesday", vec![TimeSlot::new("14:00", "15:00")])]),
    ];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    assert_eq!(calendar.timeline.len(), 2);
    let dots = calendar.marked_dates.dots(day(13));
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].kind, ScheduleKind::Weekly);
}

#[test]
fn fixture_marks_each_kind_once_per_day() {
    let calendar = build_week_calendar(&fixture(), &FixedClock(now()), Weekday::Sun);

    // 7 daily + 2 weekly (Mon, Thu) + 1 custom + 1 stopped weekly.
    assert_eq!(calendar.timeline.len(), 11);
    assert_eq!(calendar.marked_dates.len(), 7);

    let thursday: Vec<ScheduleKind> = calendar
        .marked_dates
        .dots(day(15))
        .iter()
        .map(|dot| dot.kind)
        .collect();
    assert_eq!(thursday, vec![ScheduleKind::Daily, ScheduleKind::Weekly]);

    let friday: Vec<ScheduleKind> = calendar
        .marked_dates
        .dots(day(16))
        .iter()
        .map(|dot| dot.kind)
        .collect();
    assert_eq!(friday, vec![ScheduleKind::Daily, ScheduleKind::Custom]);
}

#[test]
fn overnight_slot_ends_next_day() {
    let records = vec![ScheduleRecord::weekly(
        5,
        "Night shift walkdown",
        [("Friday", vec![TimeSlot::new("22:00", "06:00")])],
    )];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    let event = &calendar.timeline[0];
    assert_eq!(event.start, bangkok(2026, 10, 16, 22, 0));
    assert_eq!(event.end, bangkok(2026, 10, 17, 6, 0));
    assert_eq!(event.summary, "22:00 - 06:00");
}

#[test]
fn expand_accepts_an_explicit_window() {
    let records = vec![ScheduleRecord::daily(1, "Daily", vec![TimeSlot::new("08:00", "09:00")])];
    let window = DisplayWindow::new(bangkok(2026, 10, 1, 0, 0), bangkok(2026, 10, 3, 23, 59));

    let calendar = expand(&normalize(&records), &window, now());

    assert_eq!(calendar.timeline.len(), 3);
    assert!(calendar.timeline.iter().all(|event| event.status_type == StatusType::End));
}

#[test]
fn serialized_event_shape() {
    let records = vec![ScheduleRecord::weekly(
        7,
        "Pump",
        [("Saturday", vec![TimeSlot::new("10:00", "11:00")])],
    )];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);
    let value = serde_json::to_value(&calendar).unwrap();

    let event = &value["timeline"][0];
    assert_eq!(event["ScheduleID"], 7);
    assert_eq!(event["title"], "Pump");
    assert_eq!(event["start"], "2026-10-17T10:00:00+07:00");
    assert_eq!(event["end"], "2026-10-17T11:00:00+07:00");
    assert_eq!(event["summary"], "10:00 - 11:00");
    assert_eq!(event["type"], "Weekly");
    assert_eq!(event["status"], true);
    assert_eq!(event["statustype"], "wait");
    assert!(value["markedDates"]["2026-10-17"]["dots"].is_array());
}

#[test_log::test]
fn day_without_local_midnight_keeps_its_events() {
    // America/Santiago jumps from 00:00 to 01:00 on Sunday 2026-09-06.
    let santiago = |d: u32, h: u32| {
        chrono_tz::America::Santiago
            .with_ymd_and_hms(2026, 9, d, h, 0, 0)
            .unwrap()
    };
    let records = vec![
        ScheduleRecord::daily(1, "Daily", vec![TimeSlot::new("08:00", "09:00")]),
        ScheduleRecord::weekly(2, "Sunday", [("Sunday", vec![TimeSlot::new("10:00", "11:00")])]),
    ];
    let calendar = build_week_calendar(&records, &FixedClock(santiago(2, 12)), Weekday::Mon);

    let daily = calendar
        .timeline
        .iter()
        .filter(|event| event.kind == ScheduleKind::Daily)
        .count();
    assert_eq!(daily, 7);

    let sunday: Vec<_> = calendar
        .timeline
        .iter()
        .filter(|event| event.kind == ScheduleKind::Weekly)
        .collect();
    assert_eq!(sunday.len(), 1);
    assert_eq!(sunday[0].start, santiago(6, 10));
    assert_eq!(calendar.marked_dates.dots(sunday[0].date()).len(), 2);
}

#[test]
fn custom_date_outside_the_week_is_still_shown() {
    let records = vec![ScheduleRecord::custom(
        8,
        "Quarterly audit",
        vec![TimeSlot::new("02-11-2026 09:00", "02-11-2026 12:00")],
    )];
    let calendar = build_week_calendar(&records, &FixedClock(now()), Weekday::Sun);

    assert_eq!(calendar.timeline.len(), 1);
    assert_eq!(calendar.timeline[0].start, bangkok(2026, 11, 2, 9, 0));
    assert_eq!(calendar.marked_dates.len(), 1);
}
