//! Fund report routes.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Response,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use terra_shared::types::FundId;
use tracing::info;

use super::{ReportContext, respond};
use crate::AppState;

/// Creates the fund routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/funds/{fund_id}/report", get(get_fund_report))
        .route(
            "/funds/{fund_id}/travel-requests",
            get(get_fund_travel_requests),
        )
}

/// Query parameters for fund reports.
#[derive(Debug, Deserialize)]
pub struct FundReportQuery {
    /// Period start (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
}

/// GET `/funds/{fund_id}/report` - Money charged to the fund, per employee.
async fn get_fund_report(
    State(state): State<AppState>,
    Path(fund_id): Path<FundId>,
    Query(query): Query<FundReportQuery>,
) -> Response {
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    info!(fund_id = %fund_id, period = %ctx.period(), "Building fund report");

    let (start, end) = ctx.bounds();
    respond(ctx.service(&state).fund_report(fund_id, start, end))
}

/// GET `/funds/{fund_id}/travel-requests` - Money charged to the fund, per travel request.
async fn get_fund_travel_requests(
    State(state): State<AppState>,
    Path(fund_id): Path<FundId>,
    Query(query): Query<FundReportQuery>,
) -> Response {
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };

    let (start, end) = ctx.bounds();
    respond(ctx.service(&state).fund_travel_request_report(fund_id, start, end))
}
