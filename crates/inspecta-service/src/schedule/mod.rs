//! Schedule retrieval from the backend and the week calendar built from it.

use chrono::Weekday;
use inspecta_core::constants::{GET_SCHEDULE_PATH, LIST_SCHEDULES_PATH};
use inspecta_schedule::{Clock, ScheduleId, ScheduleRecord, WeekCalendar, build_week_calendar};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone)]
pub struct ScheduleService {
    client: ApiClient,
}

/// `GetSchedule` answers with either the record or a one-element list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Box<ScheduleRecord>),
    Many(Vec<ScheduleRecord>),
}

impl ScheduleService {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// ## Summary
    /// Fetches every schedule visible to the configured account.
    ///
    /// ## Errors
    /// Returns an error if the request fails or the payload is not a schedule list.
    #[tracing::instrument(skip(self))]
    pub async fn list_schedules(&self) -> ServiceResult<Vec<ScheduleRecord>> {
        let records: Vec<ScheduleRecord> = self
            .client
            .post(LIST_SCHEDULES_PATH, &serde_json::json!({}))
            .await?;
        tracing::info!(count = records.len(), "Fetched schedules");
        Ok(records)
    }

    /// ## Summary
    /// Fetches a single schedule by id.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if the backend returns no record,
    /// or any request/decode error.
    #[tracing::instrument(skip(self, id), fields(schedule_id = %id))]
    pub async fn get_schedule(&self, id: &ScheduleId) -> ServiceResult<ScheduleRecord> {
        let response: Option<OneOrMany> = self
            .client
            .post(GET_SCHEDULE_PATH, &serde_json::json!({ "ScheduleID": id }))
            .await?;

        let record = match response {
            Some(OneOrMany::One(record)) => Some(*record),
            Some(OneOrMany::Many(records)) => records.into_iter().next(),
            None => None,
        };
        record.ok_or_else(|| ServiceError::NotFound(format!("schedule {id}")))
    }

    /// ## Summary
    /// Fetches all schedules and expands them over the week containing `clock.now()`.
    ///
    /// ## Errors
    /// Returns an error only if fetching fails; malformed schedules are dropped.
    pub async fn week_calendar(
        &self,
        clock: &impl Clock,
        week_start: Weekday,
    ) -> ServiceResult<WeekCalendar> {
        let records = self.list_schedules().await?;
        Ok(build_week_calendar(&records, clock, week_start))
    }
}
