//! Flattens schedule records into one timeline item per usable slot.
//!
//! Normalization is best effort: slots with a missing or unparsable bound,
//! weekly entries with an unknown day name, and custom slots with an invalid
//! date are dropped (logged at debug level) instead of failing the batch.

use chrono::Weekday;
use inspecta_core::types::ScheduleKind;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::model::{ScheduleId, ScheduleRecord, TimeSlot};
use crate::recurrence::{Recurrence, TimeRange, parse_custom_date, parse_weekday};

/// A single recurring slot of a schedule, ready for expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(rename = "ScheduleID")]
    pub schedule_id: ScheduleId,
    pub date: Recurrence,
    pub name: String,
    pub time: TimeRange,
    pub status: bool,
}

/// ## Summary
/// Converts schedule records into timeline items.
///
/// Records keep their input order. Weekly days are emitted Sunday through
/// Saturday and slots keep their order within a record.
#[must_use]
pub fn normalize(records: &[ScheduleRecord]) -> Vec<TimelineItem> {
    let mut items = Vec::new();
    for record in records {
        let before = items.len();
        match record.kind {
            Some(ScheduleKind::Daily) => normalize_daily(record, &mut items),
            Some(ScheduleKind::Weekly) => normalize_weekly(record, &mut items),
            Some(ScheduleKind::Custom) => normalize_custom(record, &mut items),
            None => {
                tracing::debug!(schedule_id = %record.id, "Skipping schedule with unknown type");
            }
        }
        tracing::trace!(
            schedule_id = %record.id,
            items = items.len() - before,
            "Normalized schedule"
        );
    }
    items
}

fn item(record: &ScheduleRecord, date: Recurrence, time: TimeRange) -> TimelineItem {
    TimelineItem {
        schedule_id: record.id.clone(),
        date,
        name: record.name.clone(),
        time,
        status: record.is_active,
    }
}

fn slot_range(record: &ScheduleRecord, slot: &TimeSlot) -> Option<TimeRange> {
    let Some((start, end)) = slot.bounds() else {
        tracing::debug!(schedule_id = %record.id, "Skipping slot with a missing bound");
        return None;
    };
    match TimeRange::parse(start, end) {
        Ok(range) => Some(range),
        Err(err) => {
            tracing::debug!(schedule_id = %record.id, error = %err, "Skipping slot");
            None
        }
    }
}

fn normalize_daily(record: &ScheduleRecord, items: &mut Vec<TimelineItem>) {
    items.extend(
        record
            .time_slots
            .iter()
            .filter_map(|slot| slot_range(record, slot))
            .map(|range| item(record, Recurrence::Daily, range)),
    );
}

fn normalize_weekly(record: &ScheduleRecord, items: &mut Vec<TimelineItem>) {
    let mut days: Vec<(Weekday, &Vec<TimeSlot>)> = record
        .time_week
        .iter()
        .filter_map(|(name, slots)| match parse_weekday(name) {
            Ok(day) => Some((day, slots)),
            Err(err) => {
                tracing::debug!(schedule_id = %record.id, error = %err, "Skipping weekly day");
                None
            }
        })
        .collect();
    days.sort_by_key(|(day, _)| day.num_days_from_sunday());

    for (day, slots) in days {
        items.extend(
            slots
                .iter()
                .filter_map(|slot| slot_range(record, slot))
                .map(|range| item(record, Recurrence::Weekly(day), range)),
        );
    }
}

fn normalize_custom(record: &ScheduleRecord, items: &mut Vec<TimelineItem>) {
    for slot in &record.time_custom {
        let Some((start, end)) = slot.bounds() else {
            tracing::debug!(schedule_id = %record.id, "Skipping custom slot with a missing bound");
            continue;
        };
        match custom_slot(start, end) {
            Ok((date, range)) => items.push(item(record, Recurrence::Custom(date), range)),
            Err(err) => {
                tracing::debug!(schedule_id = %record.id, error = %err, "Skipping custom slot");
            }
        }
    }
}

/// Splits `DD-MM-YYYY HH:MM` on the first space. The end bound may repeat the
/// date, so only its text after the last space is used as the time.
fn custom_slot(start: &str, end: &str) -> ScheduleResult<(chrono::NaiveDate, TimeRange)> {
    let (date_part, start_time) = start.split_once(' ').ok_or_else(|| {
        ScheduleError::ParseError(format!("custom slot start without time: {start:?}"))
    })?;
    let end_time = end.rsplit_once(' ').map_or(end, |(_, time)| time);

    let date = parse_custom_date(date_part)?;
    let range = TimeRange::parse(start_time, end_time)?;
    Ok((date, range))
}
