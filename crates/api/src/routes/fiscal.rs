//! Fiscal year routes.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use terra_core::reports::ReportError;

use super::error_response;
use crate::AppState;

/// Creates the fiscal year routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/fiscal-years", get(list_fiscal_years))
}

/// Current fiscal year and every fiscal year since inception.
#[derive(Debug, Serialize)]
pub struct FiscalYearsResponse {
    /// Fiscal year containing today.
    pub current_fiscal_year: i32,
    /// First day of the current fiscal year.
    pub start_date: NaiveDate,
    /// Last day of the current fiscal year.
    pub end_date: NaiveDate,
    /// Fiscal years from inception through the current one.
    pub fiscal_years: Vec<i32>,
}

/// GET `/fiscal-years`
async fn list_fiscal_years(State(state): State<AppState>) -> Response {
    let today = Utc::now().date_naive();
    match state.calendar.current_period(today) {
        Ok(period) => Json(FiscalYearsResponse {
            current_fiscal_year: state.calendar.current_fiscal_year(today),
            start_date: period.start,
            end_date: period.end,
            fiscal_years: state
                .calendar
                .fiscal_year_list(state.reporting.inception_year, today),
        })
        .into_response(),
        Err(e) => error_response(ReportError::from(e).into()),
    }
}
