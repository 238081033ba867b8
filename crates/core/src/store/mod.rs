//! Read-only access to travel data.
//!
//! Reports are computed against the [`TravelStore`] trait. [`Snapshot`] is the
//! in-memory implementation the database layer fills in one transaction.

pub mod error;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{Snapshot, SnapshotParts};

use terra_shared::types::{ActivityId, EmployeeId, FundId, TravelRequestId, UnitId};

use crate::domain::{
    Activity, ActualExpense, Employee, Fund, Funding, TravelRequest, Unit, Vacation,
};

/// Lookups the reporting engine needs.
///
/// Collections are returned in ascending id order. Unknown ids yield `None` or
/// an empty collection, never an error.
pub trait TravelStore {
    /// Looks up a unit.
    fn unit(&self, id: UnitId) -> Option<&Unit>;

    /// Units whose parent is `id`.
    fn subunits(&self, id: UnitId) -> Vec<&Unit>;

    /// Employees directly assigned to `id`.
    fn unit_employees(&self, id: UnitId) -> Vec<&Employee>;

    /// Looks up an employee.
    fn employee(&self, id: EmployeeId) -> Option<&Employee>;

    /// Every employee.
    fn employees(&self) -> Vec<&Employee>;

    /// Employees whose supervisor is `id`.
    fn direct_reports(&self, id: EmployeeId) -> Vec<&Employee>;

    /// Looks up a fund.
    fn fund(&self, id: FundId) -> Option<&Fund>;

    /// Looks up an activity.
    fn activity(&self, id: ActivityId) -> Option<&Activity>;

    /// Looks up a travel request.
    fn travel_request(&self, id: TravelRequestId) -> Option<&TravelRequest>;

    /// Travel requests submitted by `traveler`.
    fn travel_requests_by(&self, traveler: EmployeeId) -> Vec<&TravelRequest>;

    /// Funding recorded on a travel request.
    fn fundings_for(&self, travel_request: TravelRequestId) -> Vec<&Funding>;

    /// Actual expenses recorded on a travel request.
    fn expenses_for(&self, travel_request: TravelRequestId) -> Vec<&ActualExpense>;

    /// Vacations attached to a travel request.
    fn vacations_for(&self, travel_request: TravelRequestId) -> Vec<&Vacation>;

    /// Funding drawn from a fund.
    fn fundings_against(&self, fund: FundId) -> Vec<&Funding>;

    /// Actual expenses charged to a fund.
    fn expenses_against(&self, fund: FundId) -> Vec<&ActualExpense>;
}
