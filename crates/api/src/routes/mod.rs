//! API route definitions.
//!
//! Report routes validate the requested period before touching the database,
//! then load one snapshot and run the report over it.

use std::str::FromStr;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::json;
use terra_core::fiscal::DateRange;
use terra_core::reports::{ReportError, ReportService};
use terra_core::store::Snapshot;
use terra_db::SnapshotRepository;
use terra_shared::AppError;
use terra_shared::types::parse_id_list;
use tracing::error;

use crate::AppState;

pub mod fiscal;
pub mod funds;
pub mod health;
pub mod org;
pub mod reports;
pub mod units;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(fiscal::routes())
        .merge(org::routes())
        .merge(units::routes())
        .merge(funds::routes())
        .merge(reports::routes())
}

/// Renders an error as `{"error": CODE, "message": ...}`.
///
/// Server errors are logged and their details withheld from the client.
pub(crate) fn error_response(err: AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if err.is_server_error() {
        error!(error = %err, "Request failed");
        "An error occurred".to_string()
    } else {
        err.to_string()
    };
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}

/// Serializes a report, or renders its error.
pub(crate) fn respond<T: Serialize>(result: Result<T, ReportError>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => error_response(e.into()),
    }
}

/// Parses an optional comma-separated id list from a query parameter.
pub(crate) fn parse_ids<T: FromStr>(raw: Option<&str>, param: &str) -> Result<Vec<T>, Response> {
    parse_id_list(raw.unwrap_or_default()).map_err(|part| {
        error_response(AppError::Validation(format!(
            "Invalid id in `{param}`: {part}"
        )))
    })
}

/// Loads the travel snapshot, rendering failures as responses.
pub(crate) async fn load_snapshot(state: &AppState) -> Result<Snapshot, Response> {
    SnapshotRepository::new((*state.db).clone())
        .load()
        .await
        .map_err(|e| error_response(e.into()))
}

/// A validated period and the snapshot to report over.
pub(crate) struct ReportContext {
    snapshot: Snapshot,
    period: DateRange,
    today: NaiveDate,
}

impl ReportContext {
    /// Resolves the period, then loads the snapshot.
    pub(crate) async fn prepare(
        state: &AppState,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, Response> {
        let today = Utc::now().date_naive();
        let period = state
            .calendar
            .resolve(start_date, end_date, today)
            .map_err(|e| error_response(ReportError::from(e).into()))?;

        let snapshot = load_snapshot(state).await?;

        Ok(Self {
            snapshot,
            period,
            today,
        })
    }

    pub(crate) fn period(&self) -> DateRange {
        self.period
    }

    /// Report service over the snapshot, relative to today.
    pub(crate) fn service(&self, state: &AppState) -> ReportService<'_, Snapshot> {
        ReportService::new(&self.snapshot, state.calendar, self.today)
    }

    /// The resolved period as explicit builder bounds.
    pub(crate) fn bounds(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (Some(self.period.start), Some(self.period.end))
    }
}
