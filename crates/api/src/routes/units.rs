//! Unit report routes.

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Response,
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use terra_shared::types::UnitId;
use tracing::info;

use super::{ReportContext, respond};
use crate::AppState;

/// Creates the unit routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/units/{unit_id}/report", get(get_unit_report))
}

/// Query parameters for the unit report.
#[derive(Debug, Deserialize)]
pub struct UnitReportQuery {
    /// Period start (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// Period end (YYYY-MM-DD).
    pub end_date: Option<NaiveDate>,
}

/// GET `/units/{unit_id}/report` - Travel totals for the unit and its subunits.
async fn get_unit_report(
    State(state): State<AppState>,
    Path(unit_id): Path<UnitId>,
    Query(query): Query<UnitReportQuery>,
) -> Response {
    let ctx = match ReportContext::prepare(&state, query.start_date, query.end_date).await {
        Ok(ctx) => ctx,
        Err(response) => return response,
    };
    info!(unit_id = %unit_id, period = %ctx.period(), "Building unit report");

    let (start, end) = ctx.bounds();
    respond(ctx.service(&state).unit_report(unit_id, start, end))
}
