//! Schedule records and their expansion into dated calendar timelines.
//!
//! The pipeline is `ScheduleRecord` → [`normalize`] → `TimelineItem` →
//! [`expand`] → `TimeLine` plus `MarkedDates`, all recomputed per pass.

pub mod calendar;
pub mod error;
pub mod expand;
pub mod marked;
pub mod model;
pub mod normalize;
pub mod palette;
pub mod recurrence;

pub use calendar::{WeekCalendar, build_week_calendar};
pub use expand::{Clock, DisplayWindow, FixedClock, StatusType, SystemClock, TimeLine, expand};
pub use marked::{Dot, MarkedDates, MarkedDay};
pub use model::{ScheduleId, ScheduleRecord, TimeSlot};
pub use normalize::{TimelineItem, normalize};
pub use recurrence::{Recurrence, TimeRange};
