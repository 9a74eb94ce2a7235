//! Command-line front end: loads schedules and prints their week calendar.

pub mod cli;
pub mod error;
pub mod source;
