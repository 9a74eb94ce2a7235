//! Access to the backend web services and the schedule calendar built on them.

pub mod client;
pub mod error;
pub mod schedule;
