//! Loads the travel tables into an in-memory [`Snapshot`].
//!
//! Every table is read inside one read-only, repeatable-read transaction so a
//! report never mixes rows from before and after a concurrent write.

use chrono::Utc;
use sea_orm::{
    AccessMode, DatabaseConnection, DbErr, EntityTrait, IsolationLevel, QueryOrder,
    TransactionTrait,
};
use terra_core::domain::{
    Activity, ActualExpense, Employee, Fund, Funding, TravelRequest, Unit, UnknownCode, Vacation,
};
use terra_core::store::{Snapshot, SnapshotError, SnapshotParts};
use terra_shared::AppError;
use terra_shared::types::{
    ActivityId, ActualExpenseId, EmployeeId, FundId, FundingId, TravelRequestId, UnitId,
    VacationId,
};
use tracing::debug;

use crate::entities::{
    activities, actual_expenses, employees, fundings, funds, travel_requests, units, vacations,
};

/// Errors raised while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotRepositoryError {
    /// Query or transaction failure.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Rows loaded but do not form a consistent snapshot.
    #[error("Inconsistent travel data: {0}")]
    Snapshot(#[from] SnapshotError),

    /// A code column holds a value no domain type accepts.
    #[error("Invalid stored value: {0}")]
    InvalidCode(#[from] UnknownCode),
}

impl From<SnapshotRepositoryError> for AppError {
    fn from(err: SnapshotRepositoryError) -> Self {
        match err {
            SnapshotRepositoryError::Database(e) => Self::Database(e.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Reads travel data for reporting.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    db: DatabaseConnection,
}

impl SnapshotRepository {
    /// Creates a new snapshot repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every travel table into a [`Snapshot`].
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails, a code column is unknown, or the
    /// rows reference missing records.
    pub async fn load(&self) -> Result<Snapshot, SnapshotRepositoryError> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        let unit_rows = units::Entity::find()
            .order_by_asc(units::Column::Id)
            .all(&txn)
            .await?;
        let employee_rows = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .all(&txn)
            .await?;
        let fund_rows = funds::Entity::find()
            .order_by_asc(funds::Column::Id)
            .all(&txn)
            .await?;
        let activity_rows = activities::Entity::find()
            .order_by_asc(activities::Column::Id)
            .all(&txn)
            .await?;
        let travel_request_rows = travel_requests::Entity::find()
            .order_by_asc(travel_requests::Column::Id)
            .all(&txn)
            .await?;
        let funding_rows = fundings::Entity::find()
            .order_by_asc(fundings::Column::Id)
            .all(&txn)
            .await?;
        let expense_rows = actual_expenses::Entity::find()
            .order_by_asc(actual_expenses::Column::Id)
            .all(&txn)
            .await?;
        let vacation_rows = vacations::Entity::find()
            .order_by_asc(vacations::Column::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;

        let parts = SnapshotParts {
            units: unit_rows
                .into_iter()
                .map(unit_from_model)
                .collect::<Result<_, _>>()?,
            employees: employee_rows
                .into_iter()
                .map(employee_from_model)
                .collect::<Result<_, _>>()?,
            funds: fund_rows.into_iter().map(fund_from_model).collect(),
            activities: activity_rows.into_iter().map(activity_from_model).collect(),
            travel_requests: travel_request_rows
                .into_iter()
                .map(travel_request_from_model)
                .collect(),
            fundings: funding_rows.into_iter().map(funding_from_model).collect(),
            expenses: expense_rows
                .into_iter()
                .map(expense_from_model)
                .collect::<Result<_, _>>()?,
            vacations: vacation_rows.into_iter().map(vacation_from_model).collect(),
        };

        let snapshot = Snapshot::from_parts(parts)?;
        debug!(
            travel_requests = snapshot.travel_request_count(),
            "Loaded travel snapshot"
        );
        Ok(snapshot)
    }
}

// Code columns are fixed-width CHAR, so padding is trimmed before parsing.

fn unit_from_model(model: units::Model) -> Result<Unit, UnknownCode> {
    Ok(Unit {
        id: UnitId::new(model.id),
        name: model.name,
        unit_type: model.unit_type.trim().parse()?,
        manager: model.manager_id.map(EmployeeId::new),
        parent_unit: model.parent_unit_id.map(UnitId::new),
    })
}

fn employee_from_model(model: employees::Model) -> Result<Employee, UnknownCode> {
    Ok(Employee {
        id: EmployeeId::new(model.id),
        name: model.name,
        uid: model.uid,
        unit: UnitId::new(model.unit_id),
        active: model.active,
        supervisor: model.supervisor_id.map(EmployeeId::new),
        employee_type: model.employee_type.trim().parse()?,
        extra_allocation: model.extra_allocation,
        allocation_expire_date: model.allocation_expire_date,
    })
}

fn fund_from_model(model: funds::Model) -> Fund {
    Fund {
        id: FundId::new(model.id),
        account: model.account,
        cost_center: model.cost_center,
        fund: model.fund,
        manager: EmployeeId::new(model.manager_id),
        unit: model.unit_id.map(UnitId::new),
    }
}

fn activity_from_model(model: activities::Model) -> Activity {
    Activity {
        id: ActivityId::new(model.id),
        name: model.name,
        start: model.start_date,
        end: model.end_date,
        city: model.city,
        state: model.state,
        country: model.country,
    }
}

fn travel_request_from_model(model: travel_requests::Model) -> TravelRequest {
    TravelRequest {
        id: TravelRequestId::new(model.id),
        traveler: EmployeeId::new(model.traveler_id),
        activity: ActivityId::new(model.activity_id),
        departure_date: model.departure_date,
        return_date: model.return_date,
        days_ooo: i64::from(model.days_ooo),
        administrative: model.administrative,
        closed: model.closed,
        canceled: model.canceled,
        approved_by: model.approved_by_id.map(EmployeeId::new),
        approved_on: model.approved_on.map(|t| t.with_timezone(&Utc)),
        international_approved_on: model.international_approved_on.map(|t| t.with_timezone(&Utc)),
    }
}

fn funding_from_model(model: fundings::Model) -> Funding {
    Funding {
        id: FundingId::new(model.id),
        travel_request: TravelRequestId::new(model.travel_request_id),
        fund: FundId::new(model.fund_id),
        amount: model.amount,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn expense_from_model(model: actual_expenses::Model) -> Result<ActualExpense, UnknownCode> {
    Ok(ActualExpense {
        id: ActualExpenseId::new(model.id),
        travel_request: TravelRequestId::new(model.travel_request_id),
        fund: FundId::new(model.fund_id),
        expense_type: model.expense_type.trim().parse()?,
        total: model.total,
        date_paid: model.date_paid,
    })
}

fn vacation_from_model(model: vacations::Model) -> Vacation {
    Vacation {
        id: VacationId::new(model.id),
        travel_request: TravelRequestId::new(model.travel_request_id),
        start: model.start_date,
        end: model.end_date,
    }
}
