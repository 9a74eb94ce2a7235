use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Run state of an expanded event relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Running,
    Wait,
    End,
    Stop,
}

impl StatusType {
    /// ## Summary
    /// Classifies an event spanning `[start, end]` (both inclusive) at `now`.
    ///
    /// An inactive schedule is always `Stop`, whatever the timing.
    #[must_use]
    pub fn classify(active: bool, now: DateTime<Tz>, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        if !active {
            Self::Stop
        } else if start <= now && now <= end {
            Self::Running
        } else if now > end {
            Self::End
        } else {
            Self::Wait
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Wait => "wait",
            Self::End => "end",
            Self::Stop => "stop",
        }
    }
}

impl std::fmt::Display for StatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
