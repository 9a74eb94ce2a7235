//! Shared configuration, constants and base types for the inspecta crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
