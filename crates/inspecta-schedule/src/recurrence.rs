//! Recurrence descriptors and slot time ranges.
//!
//! A [`Recurrence`] is the typed form of the descriptor strings the calendar
//! consumers know: `Recurring Daily`, `Weekly (<DayName>)` and
//! `Custom (<DD-MM-YYYY>)`. Both directions are supported so items can be
//! written out and read back in that form.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Weekday};
use inspecta_core::constants::{CUSTOM_DATE_FORMAT, SLOT_TIME_FORMAT};
use inspecta_core::types::ScheduleKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ScheduleError, ScheduleResult};

const DAILY_DESCRIPTOR: &str = "Recurring Daily";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    Daily,
    Weekly(Weekday),
    Custom(NaiveDate),
}

impl Recurrence {
    #[must_use]
    pub const fn kind(self) -> ScheduleKind {
        match self {
            Self::Daily => ScheduleKind::Daily,
            Self::Weekly(_) => ScheduleKind::Weekly,
            Self::Custom(_) => ScheduleKind::Custom,
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => f.write_str(DAILY_DESCRIPTOR),
            Self::Weekly(day) => write!(f, "Weekly ({})", weekday_name(*day)),
            Self::Custom(date) => write!(f, "Custom ({})", date.format(CUSTOM_DATE_FORMAT)),
        }
    }
}

impl FromStr for Recurrence {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        let s = s.trim();
        if s == DAILY_DESCRIPTOR {
            return Ok(Self::Daily);
        }
        if let Some(rest) = s.strip_prefix("Weekly") {
            let day = parenthesized(rest).ok_or_else(|| {
                ScheduleError::ParseError(format!("weekly descriptor without day: {s:?}"))
            })?;
            return parse_weekday(day).map(Self::Weekly);
        }
        if let Some(rest) = s.strip_prefix("Custom") {
            let date = parenthesized(rest).ok_or_else(|| {
                ScheduleError::ParseError(format!("custom descriptor without date: {s:?}"))
            })?;
            return parse_custom_date(date).map(Self::Custom);
        }
        Err(ScheduleError::ParseError(format!(
            "unrecognised recurrence descriptor: {s:?}"
        )))
    }
}

impl Serialize for Recurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Recurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Time-of-day range of a slot. An `end` before `start` crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    #[must_use]
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// ## Summary
    /// Parses a start/end pair of `HH:MM` (or `HH:MM:SS`) strings.
    ///
    /// ## Errors
    /// Returns `ScheduleError::ParseError` if either bound is not a valid time of day.
    pub fn parse(start: &str, end: &str) -> ScheduleResult<Self> {
        Ok(Self::new(parse_slot_time(start)?, parse_slot_time(end)?))
    }

    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(SLOT_TIME_FORMAT),
            self.end.format(SLOT_TIME_FORMAT)
        )
    }
}

impl FromStr for TimeRange {
    type Err = ScheduleError;

    fn from_str(s: &str) -> ScheduleResult<Self> {
        let (start, end) = s
            .split_once(" - ")
            .ok_or_else(|| ScheduleError::ParseError(format!("invalid time range: {s:?}")))?;
        Self::parse(start, end)
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Text between the first `(` and the last `)`.
fn parenthesized(s: &str) -> Option<&str> {
    let open = s.find('(')?;
    let close = s.rfind(')')?;
    (close > open)
        .then(|| s[open + 1..close].trim())
        .filter(|inner| !inner.is_empty())
}

/// English name of a weekday as used in `TimeWeek` keys.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// ## Summary
/// Parses an English weekday name, full or abbreviated, in any case.
///
/// ## Errors
/// Returns `ScheduleError::ParseError` for anything else.
pub fn parse_weekday(name: &str) -> ScheduleResult<Weekday> {
    name.trim()
        .parse::<Weekday>()
        .map_err(|_err| ScheduleError::ParseError(format!("invalid day name: {name:?}")))
}

/// ## Summary
/// Parses a `DD-MM-YYYY` date.
///
/// ## Errors
/// Returns `ScheduleError::ParseError` if the text is not a real calendar date.
pub fn parse_custom_date(text: &str) -> ScheduleResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), CUSTOM_DATE_FORMAT)
        .map_err(|err| ScheduleError::ParseError(format!("invalid custom date {text:?}: {err}")))
}

/// ## Summary
/// Parses a slot time given as `HH:MM` or `HH:MM:SS`.
///
/// ## Errors
/// Returns `ScheduleError::ParseError` if neither layout matches.
pub fn parse_slot_time(text: &str) -> ScheduleResult<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, SLOT_TIME_FORMAT)
        .or_else(|_err| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .map_err(|err| ScheduleError::ParseError(format!("invalid slot time {text:?}: {err}")))
}
