use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Recurrence kind of a schedule, as stored in `TypeSchedule`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScheduleKind {
    Daily,
    Weekly,
    Custom,
}

impl ScheduleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("daily") => Ok(Self::Daily),
            s if s.eq_ignore_ascii_case("weekly") => Ok(Self::Weekly),
            s if s.eq_ignore_ascii_case("custom") => Ok(Self::Custom),
            other => Err(CoreError::InvalidInput(format!(
                "unknown schedule type {other:?}"
            ))),
        }
    }
}
