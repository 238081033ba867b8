//! Cross-unit report routes.

use axum::{
    Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use terra_core::reports::{AllowanceCaps, EmployeeAllowance};
use terra_shared::types::{CurrencyFormat, EmployeeId, TravelRequestId, format_currency};

use super::{ReportContext, parse_ids, respond};
use crate::AppState;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/employee-types", get(get_employee_type_report))
        .route("/reports/employees", get(get_employee_report))
        .route("/reports/travel-requests", get(get_travel_request_report))
}

/// Query parameters for the employee-type report.
#[derive(Debug, Deserialize)]
pub struct EmployeeTypeQuery {
    /// Period start (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
    /// Employee IDs to compute totals for (comma-separated). All when absent.
    pub employees: Option<String>,
}

/// Query parameters for reports over explicit ids.
#[derive(Debug, Deserialize)]
pub struct IdListQuery {
    /// IDs to report on (comma-separated).
    pub ids: Option<String>,
    /// Period start (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
}

/// An employee's allowance with display-formatted amounts.
#[derive(Debug, Serialize)]
pub struct EmployeeAllowanceResponse {
    /// Raw figures.
    #[serde(flatten)]
    pub allowance: EmployeeAllowance,
    /// `profdev_cap` formatted for display.
    pub profdev_cap_display: String,
    /// `profdev_remaining` formatted for display.
    pub profdev_remaining_display: String,
}

impl EmployeeAllowanceResponse {
    fn new(allowance: EmployeeAllowance, format: &CurrencyFormat) -> Self {
        Self {
            profdev_cap_display: format_currency(allowance.profdev_cap, format),
            profdev_remaining_display: format_currency(allowance.profdev_remaining, format),
            allowance,
        }
    }
}

/// GET `/reports/employee-types` - Travel totals grouped by employee type.
async fn get_employee_type_report(
    State(state): State<AppState>,
    Query(query): Query<EmployeeTypeQuery>,
) -> Response {
    let subset = match query
        .employees
        .as_deref()
        .map(|raw| parse_ids::<EmployeeId>(Some(raw), "employees"))
        .transpose()
    {
        Ok(subset) => subset,
        Err(response) => return response,
    };
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    let (start, end) = ctx.bounds();
    respond(ctx.service(&state).employee_type_report(subset.as_deref(), start, end))
}

/// GET `/reports/employees` - Professional development usage and remaining allowance.
async fn get_employee_report(
    State(state): State<AppState>,
    Query(query): Query<IdListQuery>,
) -> Response {
    let ids = match parse_ids::<EmployeeId>(query.ids.as_deref(), "ids") {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    let caps = AllowanceCaps {
        spending: state.reporting.profdev_spending_cap,
        days: state.reporting.profdev_days_cap,
    };
    let (start, end) = ctx.bounds();
    respond(
        ctx.service(&state)
            .employee_allowance_report(&ids, caps, start, end)
            .map(|rows| {
                rows.into_iter()
                    .map(|row| EmployeeAllowanceResponse::new(row, &state.currency))
                    .collect::<Vec<_>>()
            }),
    )
}

/// GET `/reports/travel-requests` - Period figures for individual travel requests.
async fn get_travel_request_report(
    State(state): State<AppState>,
    Query(query): Query<IdListQuery>,
) -> Response {
    let ids = match parse_ids::<TravelRequestId>(query.ids.as_deref(), "ids") {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    let (start, end) = ctx.bounds();
    respond(ctx.service(&state).travel_request_report(&ids, start, end))
}
