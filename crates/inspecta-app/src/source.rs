use std::path::{Path, PathBuf};

use inspecta_core::config::Settings;
use inspecta_schedule::ScheduleRecord;
use inspecta_service::client::{ApiClient, decode_envelope};
use inspecta_service::schedule::ScheduleService;

use crate::error::{AppError, AppResult};

/// Where schedule records are read from.
#[derive(Debug, Clone)]
pub enum ScheduleSource {
    /// A JSON file holding a schedule list, bare or wrapped in `{"data": ...}`.
    File(PathBuf),
    Backend(ScheduleService),
}

impl ScheduleSource {
    /// ## Summary
    /// Uses `file` when given, otherwise the backend configured in `settings`.
    ///
    /// ## Errors
    /// Returns an error if the backend client cannot be created.
    pub fn select(file: Option<&Path>, settings: &Settings) -> AppResult<Self> {
        match file {
            Some(path) => Ok(Self::File(path.to_path_buf())),
            None => Ok(Self::Backend(ScheduleService::new(ApiClient::new(&settings.api)?))),
        }
    }

    /// ## Summary
    /// Loads all schedule records from this source.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or decoded, or the backend call fails.
    pub async fn load(&self) -> AppResult<Vec<ScheduleRecord>> {
        match self {
            Self::File(path) => {
                tracing::debug!(path = %path.display(), "Reading schedules from file");
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| AppError::ReadError {
                        path: path.display().to_string(),
                        source,
                    })?;
                Ok(decode_envelope(&text)?)
            }
            Self::Backend(service) => Ok(service.list_schedules().await?),
        }
    }
}
