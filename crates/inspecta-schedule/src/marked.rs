//! Per-day calendar dots, at most one per recurrence kind.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use inspecta_core::constants::MARKED_DATE_FORMAT;
use inspecta_core::types::ScheduleKind;
use serde::{Serialize, Serializer};

use crate::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub color: &'static str,
    #[serde(rename = "selectedDotColor")]
    pub selected_dot_color: &'static str,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
}

impl Dot {
    #[must_use]
    pub const fn for_kind(kind: ScheduleKind) -> Self {
        let colors = palette::colors(kind);
        Self {
            color: colors.color,
            selected_dot_color: colors.selected_dot_color,
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkedDay {
    pub dots: Vec<Dot>,
}

/// Calendar markers keyed by day. Serializes as `{"YYYY-MM-DD": {"dots": [...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedDates(BTreeMap<NaiveDate, MarkedDay>);

impl MarkedDates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Adds a dot of `kind` on `date` unless that day already has one of that kind.
    ///
    /// Returns `true` if a dot was inserted.
    pub fn mark(&mut self, date: NaiveDate, kind: ScheduleKind) -> bool {
        let day = self.0.entry(date).or_default();
        if day.dots.iter().any(|dot| dot.kind == kind) {
            return false;
        }
        day.dots.push(Dot::for_kind(kind));
        true
    }

    #[must_use]
    pub fn dots(&self, date: NaiveDate) -> &[Dot] {
        self.0
            .get(&date)
            .map(|day| day.dots.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MarkedDates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(date, day)| (date.format(MARKED_DATE_FORMAT).to_string(), day)),
        )
    }
}
