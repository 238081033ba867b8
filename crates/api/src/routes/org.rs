//! Organization hierarchy routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use terra_core::domain::{Employee, Unit};
use terra_core::org;
use terra_core::store::TravelStore;
use terra_shared::AppError;
use terra_shared::types::{EmployeeId, UnitId};

use super::{error_response, load_snapshot};
use crate::AppState;

/// Creates the organization routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/units/{unit_id}", get(get_unit))
        .route("/employees/{employee_id}/team", get(get_team))
}

/// A unit with its place in the tree.
#[derive(Debug, Serialize)]
pub struct UnitResponse<'a> {
    /// The unit.
    pub unit: &'a Unit,
    /// Units below it, breadth first.
    pub subunits: Vec<&'a Unit>,
    /// Employees across the unit and its subunits.
    pub employee_count: usize,
    /// Managers of the unit and its ancestors, nearest first.
    pub super_managers: Vec<&'a Employee>,
}

/// An employee and everyone reporting to them.
#[derive(Debug, Serialize)]
pub struct TeamResponse<'a> {
    /// The employee.
    pub employee: &'a Employee,
    /// Employees supervised directly.
    pub direct_reports: Vec<&'a Employee>,
    /// All transitive reports, breadth first.
    pub staff: Vec<&'a Employee>,
    /// Members of `staff` who supervise others.
    pub managers: Vec<&'a Employee>,
}

/// GET `/units/{unit_id}` - Unit details with subunits and manager chain.
async fn get_unit(State(state): State<AppState>, Path(unit_id): Path<UnitId>) -> Response {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };
    let Some(unit) = snapshot.unit(unit_id) else {
        return error_response(AppError::NotFound(format!("Unit {unit_id}")));
    };

    let subunits = org::subunit_closure(&snapshot, unit_id)
        .into_iter()
        .skip(1)
        .collect();
    Json(UnitResponse {
        unit,
        subunits,
        employee_count: org::employee_count(&snapshot, unit_id),
        super_managers: org::super_managers(&snapshot, unit_id),
    })
    .into_response()
}

/// GET `/employees/{employee_id}/team` - Direct and transitive reports.
async fn get_team(
    State(state): State<AppState>,
    Path(employee_id): Path<EmployeeId>,
) -> Response {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };
    let Some(employee) = snapshot.employee(employee_id) else {
        return error_response(AppError::NotFound(format!("Employee {employee_id}")));
    };

    let team = org::full_team(&snapshot, employee_id);
    Json(TeamResponse {
        employee,
        direct_reports: org::direct_reports(&snapshot, employee_id),
        staff: team.staff,
        managers: team.managers,
    })
    .into_response()
}
