/// Backend web-service endpoints shared across crates
pub const SCHEDULE_SERVICE: &str = "schedule_service.asmx";
pub const LIST_SCHEDULES_PATH: &str = const_str::concat!(SCHEDULE_SERVICE, "/GetScheduleList");
pub const GET_SCHEDULE_PATH: &str = const_str::concat!(SCHEDULE_SERVICE, "/GetSchedule");

/// Date and time layouts used by the backend and the calendar widgets
pub const SLOT_TIME_FORMAT: &str = "%H:%M";
pub const CUSTOM_DATE_FORMAT: &str = "%d-%m-%Y";
pub const MARKED_DATE_FORMAT: &str = "%Y-%m-%d";
