//! Builders for in-memory travel data used across the crate's tests.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use terra_shared::types::{
    ActivityId, ActualExpenseId, EmployeeId, FundId, FundingId, TravelRequestId, UnitId,
    VacationId,
};

use crate::domain::{
    Activity, ActualExpense, Employee, EmployeeType, ExpenseType, Fund, Funding, TravelRequest,
    Unit, UnitType, Vacation,
};
use crate::store::{Snapshot, SnapshotParts};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Incrementally assembles a [`Snapshot`]. Ids are assigned sequentially per
/// entity kind, starting at 1.
#[derive(Default)]
pub struct Fixture {
    pub parts: SnapshotParts,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&mut self, name: &str, parent: Option<UnitId>) -> UnitId {
        let id = UnitId::new(next_id(self.parts.units.len()));
        self.parts.units.push(Unit {
            id,
            name: name.to_string(),
            unit_type: if parent.is_some() {
                UnitType::ManagerialUnit
            } else {
                UnitType::Library
            },
            manager: None,
            parent_unit: parent,
        });
        id
    }

    pub fn employee(
        &mut self,
        name: &str,
        unit: UnitId,
        employee_type: EmployeeType,
    ) -> EmployeeId {
        let id = EmployeeId::new(next_id(self.parts.employees.len()));
        self.parts.employees.push(Employee {
            id,
            name: name.to_string(),
            uid: format!("{:09}", id.into_inner()),
            unit,
            active: true,
            supervisor: None,
            employee_type,
            extra_allocation: None,
            allocation_expire_date: None,
        });
        id
    }

    pub fn librarian(&mut self, name: &str, unit: UnitId) -> EmployeeId {
        self.employee(name, unit, EmployeeType::Librarian)
    }

    pub fn set_manager(&mut self, unit: UnitId, manager: EmployeeId) {
        if let Some(u) = self.parts.units.iter_mut().find(|u| u.id == unit) {
            u.manager = Some(manager);
        }
    }

    pub fn set_parent(&mut self, unit: UnitId, parent: UnitId) {
        if let Some(u) = self.parts.units.iter_mut().find(|u| u.id == unit) {
            u.parent_unit = Some(parent);
        }
    }

    pub fn set_supervisor(&mut self, employee: EmployeeId, supervisor: EmployeeId) {
        if let Some(e) = self.parts.employees.iter_mut().find(|e| e.id == employee) {
            e.supervisor = Some(supervisor);
        }
    }

    pub fn employee_mut(&mut self, employee: EmployeeId) -> &mut Employee {
        self.parts
            .employees
            .iter_mut()
            .find(|e| e.id == employee)
            .unwrap()
    }

    pub fn fund(&mut self, manager: EmployeeId) -> FundId {
        let id = FundId::new(next_id(self.parts.funds.len()));
        self.parts.funds.push(Fund {
            id,
            account: "604000".to_string(),
            cost_center: "LD".to_string(),
            fund: format!("{:05}", 19900 + id.into_inner()),
            manager,
            unit: None,
        });
        id
    }

    fn activity(&mut self, departure: NaiveDate, return_date: NaiveDate) -> ActivityId {
        let id = ActivityId::new(next_id(self.parts.activities.len()));
        self.parts.activities.push(Activity {
            id,
            name: format!("Conference {id}"),
            start: departure,
            end: return_date,
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            country: "USA".to_string(),
        });
        id
    }

    pub fn trip(
        &mut self,
        traveler: EmployeeId,
        departure: NaiveDate,
        return_date: NaiveDate,
        days_ooo: i64,
        administrative: bool,
    ) -> TravelRequestId {
        let activity = self.activity(departure, return_date);
        let id = TravelRequestId::new(next_id(self.parts.travel_requests.len()));
        self.parts.travel_requests.push(TravelRequest {
            id,
            traveler,
            activity,
            departure_date: departure,
            return_date,
            days_ooo,
            administrative,
            closed: false,
            canceled: false,
            approved_by: None,
            approved_on: None,
            international_approved_on: None,
        });
        id
    }

    pub fn cancel(&mut self, travel_request: TravelRequestId) {
        if let Some(t) = self
            .parts
            .travel_requests
            .iter_mut()
            .find(|t| t.id == travel_request)
        {
            t.canceled = true;
        }
    }

    pub fn funding(&mut self, travel_request: TravelRequestId, fund: FundId, amount: Decimal) {
        let id = FundingId::new(next_id(self.parts.fundings.len()));
        self.parts.fundings.push(Funding {
            id,
            travel_request,
            fund,
            amount,
            created_at: Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
        });
    }

    pub fn expense(
        &mut self,
        travel_request: TravelRequestId,
        fund: FundId,
        total: Decimal,
        date_paid: NaiveDate,
    ) {
        let id = ActualExpenseId::new(next_id(self.parts.expenses.len()));
        self.parts.expenses.push(ActualExpense {
            id,
            travel_request,
            fund,
            expense_type: ExpenseType::Other,
            total,
            date_paid,
        });
    }

    pub fn vacation(&mut self, travel_request: TravelRequestId, start: NaiveDate, end: NaiveDate) {
        let id = VacationId::new(next_id(self.parts.vacations.len()));
        self.parts.vacations.push(Vacation {
            id,
            travel_request,
            start,
            end,
        });
    }

    pub fn build(self) -> Snapshot {
        Snapshot::from_parts(self.parts).unwrap()
    }
}

fn next_id(len: usize) -> i64 {
    i64::try_from(len).unwrap() + 1
}
