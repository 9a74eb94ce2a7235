use std::path::PathBuf;

use chrono::{DateTime, Weekday};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use inspecta_core::config::{Settings, WeekStart};
use inspecta_core::error::CoreError;
use inspecta_schedule::{FixedClock, SystemClock, build_week_calendar, normalize};

use crate::error::AppResult;
use crate::source::ScheduleSource;

#[derive(Debug, Parser)]
#[command(
    name = "inspecta",
    version,
    about = "Expand inspection schedules into a weekly calendar timeline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the timeline and calendar markers for the current week
    Week {
        /// Read schedules from a JSON file instead of the backend
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Evaluate at this RFC 3339 instant instead of the current time
        #[arg(long)]
        now: Option<String>,

        /// First day of the week, overriding the configuration
        #[arg(long)]
        week_start: Option<WeekStart>,
    },

    /// Print the normalized timeline items of every schedule
    Schedules {
        /// Read schedules from a JSON file instead of the backend
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// ## Summary
/// Parses an RFC 3339 instant and moves it into `tz`.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` if the text is not RFC 3339.
pub fn parse_now(text: &str, tz: Tz) -> AppResult<DateTime<Tz>> {
    let instant = DateTime::parse_from_rfc3339(text.trim())
        .map_err(|err| CoreError::InvalidInput(format!("invalid --now {text:?}: {err}")))?;
    Ok(instant.with_timezone(&tz))
}

/// ## Summary
/// Runs `command` with `settings` and returns the pretty-printed JSON output.
///
/// ## Errors
/// Returns an error if the configuration is invalid, schedules cannot be
/// loaded, or the output cannot be serialized.
pub async fn run(command: &Commands, settings: &Settings) -> AppResult<String> {
    let tz = settings.calendar.tz()?;

    match command {
        Commands::Week {
            file,
            now,
            week_start,
        } => {
            let records = ScheduleSource::select(file.as_deref(), settings)?
                .load()
                .await?;
            let week_start: Weekday = week_start.unwrap_or(settings.calendar.week_start).weekday();

            let calendar = match now {
                Some(text) => {
                    let clock = FixedClock(parse_now(text, tz)?);
                    build_week_calendar(&records, &clock, week_start)
                }
                None => build_week_calendar(&records, &SystemClock::new(tz), week_start),
            };
            tracing::info!(
                events = calendar.timeline.len(),
                marked_days = calendar.marked_dates.len(),
                "Week calendar ready"
            );
            Ok(serde_json::to_string_pretty(&calendar)?)
        }
        Commands::Schedules { file } => {
            let records = ScheduleSource::select(file.as_deref(), settings)?
                .load()
                .await?;
            let items = normalize(&records);
            tracing::info!(records = records.len(), items = items.len(), "Schedules normalized");
            Ok(serde_json::to_string_pretty(&items)?)
        }
    }
}
