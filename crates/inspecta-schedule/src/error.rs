use thiserror::Error;

/// Schedule parsing and expansion errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Recurrence rule error: {0}")]
    RecurrenceError(String),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
