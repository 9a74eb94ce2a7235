//! Schedule records as persisted by the backend schedule service.

mod de;

use std::collections::BTreeMap;

use inspecta_core::types::ScheduleKind;
use serde::{Deserialize, Serialize};

/// Identifier of a schedule. The backend sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ScheduleId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for ScheduleId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for ScheduleId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One start/end pair of a schedule. Either bound may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl TimeSlot {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Both bounds, if the slot has them.
    #[must_use]
    pub fn bounds(&self) -> Option<(&str, &str)> {
        let start = self.start.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let end = self.end.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((start, end))
    }
}

/// A schedule as returned by the schedule service.
///
/// Only the payload matching `kind` is consulted during normalization.
/// An unrecognised `TypeSchedule` deserializes to `kind: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "ScheduleID")]
    pub id: ScheduleId,
    #[serde(rename = "ScheduleName", default, deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(rename = "TypeSchedule", default, deserialize_with = "de::lenient_kind")]
    pub kind: Option<ScheduleKind>,
    #[serde(rename = "IsActive", default, deserialize_with = "de::flag")]
    pub is_active: bool,
    #[serde(rename = "TimeSlots", default, deserialize_with = "de::null_as_default")]
    pub time_slots: Vec<TimeSlot>,
    #[serde(rename = "TimeWeek", default, deserialize_with = "de::null_as_default")]
    pub time_week: BTreeMap<String, Vec<TimeSlot>>,
    #[serde(rename = "TimeCustom", default, deserialize_with = "de::null_as_default")]
    pub time_custom: Vec<TimeSlot>,
}

impl ScheduleRecord {
    fn new(id: impl Into<ScheduleId>, name: impl Into<String>, kind: ScheduleKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: Some(kind),
            is_active: true,
            time_slots: Vec::new(),
            time_week: BTreeMap::new(),
            time_custom: Vec::new(),
        }
    }

    /// ## Summary
    /// Builds an active daily schedule with the given slots.
    #[must_use]
    pub fn daily(id: impl Into<ScheduleId>, name: impl Into<String>, slots: Vec<TimeSlot>) -> Self {
        Self {
            time_slots: slots,
            ..Self::new(id, name, ScheduleKind::Daily)
        }
    }

    /// ## Summary
    /// Builds an active weekly schedule from `(day name, slots)` pairs.
    #[must_use]
    pub fn weekly<D: Into<String>>(
        id: impl Into<ScheduleId>,
        name: impl Into<String>,
        days: impl IntoIterator<Item = (D, Vec<TimeSlot>)>,
    ) -> Self {
        Self {
            time_week: days.into_iter().map(|(day, slots)| (day.into(), slots)).collect(),
            ..Self::new(id, name, ScheduleKind::Weekly)
        }
    }

    /// ## Summary
    /// Builds an active custom-date schedule. Slot starts carry `DD-MM-YYYY HH:MM`.
    #[must_use]
    pub fn custom(id: impl Into<ScheduleId>, name: impl Into<String>, slots: Vec<TimeSlot>) -> Self {
        Self {
            time_custom: slots,
            ..Self::new(id, name, ScheduleKind::Custom)
        }
    }

    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
