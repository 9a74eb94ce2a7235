use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use chrono::Weekday;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub token: Option<String>,
}

impl ApiConfig {
    /// ## Summary
    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

/// First day of the displayed calendar week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for WeekStart {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(CoreError::InvalidInput(format!(
                "week start must be sunday or monday, got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub timezone: String,
    pub week_start: WeekStart,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured IANA timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        Tz::from_str(self.timezone.trim()).map_err(|err| {
            CoreError::ConfigError(format!(
                "unknown calendar timezone {:?}: {err}",
                self.timezone
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and a TOML file into `Settings`.
    /// Environment variables use the `INSPECTA_` prefix and `__` as the section separator,
    /// e.g. `INSPECTA_API__BASE_URL`. The file is `config.toml` unless `config_file` is given.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config.toml").required(false),
        };

        Ok(Config::builder()
            .set_default("api.base_url", "http://localhost/")?
            .set_default("api.timeout_secs", 30)?
            .set_default("calendar.timezone", "UTC")?
            .set_default("calendar.week_start", "sunday")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file)
            // Env file and process environment
            .add_source(
                config::Environment::with_prefix("INSPECTA")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file and an optional config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(config_file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(config_file)?;
    tracing::debug!(
        base_url = %settings.api.base_url,
        timezone = %settings.calendar.timezone,
        "Configuration loaded"
    );
    Ok(settings)
}
