//! Report data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use terra_shared::types::{EmployeeId, TravelRequestId, UnitId};

use crate::domain::{Employee, EmployeeType, Fund, Unit};
use crate::fiscal::DateRange;

/// The four money buckets of one traveler or travel request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyBuckets {
    /// Funding on professional development trips.
    pub profdev_requested: Decimal,
    /// Funding on administrative trips.
    pub admin_requested: Decimal,
    /// Expenses paid on professional development trips.
    pub profdev_spent: Decimal,
    /// Expenses paid on administrative trips.
    pub admin_spent: Decimal,
}

/// Day counts of one traveler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBuckets {
    /// Vacation days attached to trips.
    pub days_vacation: i64,
    /// Days out of office on professional development trips.
    pub profdev_days_away: i64,
    /// Days out of office on administrative trips.
    pub admin_days_away: i64,
}

/// Travel totals of an employee, unit, or employee type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTotals {
    /// Funding on professional development trips.
    pub profdev_requested: Decimal,
    /// Funding on administrative trips.
    pub admin_requested: Decimal,
    /// `profdev_requested + admin_requested`.
    pub total_requested: Decimal,
    /// Expenses paid on professional development trips.
    pub profdev_spent: Decimal,
    /// Expenses paid on administrative trips.
    pub admin_spent: Decimal,
    /// `profdev_spent + admin_spent`.
    pub total_spent: Decimal,
    /// Vacation days attached to trips.
    pub days_vacation: i64,
    /// Days out of office on professional development trips.
    pub profdev_days_away: i64,
    /// Days out of office on administrative trips.
    pub admin_days_away: i64,
    /// `profdev_days_away + admin_days_away`.
    pub total_days_ooo: i64,
}

impl TravelTotals {
    /// Builds totals from raw buckets, deriving the three sums.
    #[must_use]
    pub fn new(money: MoneyBuckets, days: DayBuckets) -> Self {
        Self {
            profdev_requested: money.profdev_requested,
            admin_requested: money.admin_requested,
            total_requested: money.profdev_requested + money.admin_requested,
            profdev_spent: money.profdev_spent,
            admin_spent: money.admin_spent,
            total_spent: money.profdev_spent + money.admin_spent,
            days_vacation: days.days_vacation,
            profdev_days_away: days.profdev_days_away,
            admin_days_away: days.admin_days_away,
            total_days_ooo: days.profdev_days_away + days.admin_days_away,
        }
    }
}

/// Money totals restricted to a single fund.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundTotals {
    /// Funding on professional development trips.
    pub profdev_requested: Decimal,
    /// Funding on administrative trips.
    pub admin_requested: Decimal,
    /// `profdev_requested + admin_requested`.
    pub total_requested: Decimal,
    /// Expenses paid on professional development trips.
    pub profdev_spent: Decimal,
    /// Expenses paid on administrative trips.
    pub admin_spent: Decimal,
    /// `profdev_spent + admin_spent`.
    pub total_spent: Decimal,
}

impl FundTotals {
    /// Builds totals from raw buckets, deriving the two sums.
    #[must_use]
    pub fn new(money: MoneyBuckets) -> Self {
        Self {
            profdev_requested: money.profdev_requested,
            admin_requested: money.admin_requested,
            total_requested: money.profdev_requested + money.admin_requested,
            profdev_spent: money.profdev_spent,
            admin_spent: money.admin_spent,
            total_spent: money.profdev_spent + money.admin_spent,
        }
    }
}

/// An employee with their travel totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTravelReport {
    /// The employee.
    pub employee: Employee,
    /// Travel totals.
    pub data: TravelTotals,
}

/// Employees directly assigned to one unit of a unit report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubunitReport {
    /// The unit.
    pub subunit: Unit,
    /// Directly assigned employees, by id.
    pub employees: BTreeMap<EmployeeId, EmployeeTravelReport>,
    /// Sum over `employees`.
    pub subunit_totals: TravelTotals,
}

/// Travel rollup of a unit and everything below it.
///
/// `subunits` holds one entry per unit in the closure, each listing only its
/// own directly assigned employees, not one entry per direct child with its
/// whole subtree folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    /// Root unit.
    pub unit: Unit,
    /// Reported period.
    pub period: DateRange,
    /// Every unit of the closure, root included, by id.
    pub subunits: BTreeMap<UnitId, SubunitReport>,
    /// Sum over all subunit totals.
    pub unit_totals: TravelTotals,
}

/// An employee with travel charged to a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundEmployeeReport {
    /// The employee.
    pub employee: Employee,
    /// Fund-restricted totals.
    pub data: FundTotals,
}

/// Travel charged to a single fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundReport {
    /// The fund.
    pub fund: Fund,
    /// Reported period.
    pub period: DateRange,
    /// Employees with funding or expenses against the fund, by id.
    pub employees: Vec<FundEmployeeReport>,
    /// Sum over `employees`.
    pub totals: FundTotals,
}

/// One travel request's share of a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundTravelRequestEntry {
    /// Travel request ID.
    pub travel_request_id: TravelRequestId,
    /// Traveler ID.
    pub traveler_id: EmployeeId,
    /// Traveler name.
    pub traveler: String,
    /// Fund-restricted totals of this request.
    pub data: FundTotals,
}

/// Per travel request breakdown of a fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundTravelRequestReport {
    /// The fund.
    pub fund: Fund,
    /// Reported period.
    pub period: DateRange,
    /// Travel requests touching the fund, by id.
    pub travel_requests: Vec<FundTravelRequestEntry>,
    /// Sum over `travel_requests`.
    pub totals: FundTotals,
}

/// An employee row of the employee-type report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedEmployeeReport {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Employee name.
    pub name: String,
    /// Name of the employee's unit.
    pub unit: String,
    /// Name of the unit's manager.
    pub unit_manager: Option<String>,
    /// Travel totals.
    pub data: TravelTotals,
}

/// Employees of one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTypeGroup {
    /// The type.
    pub employee_type: EmployeeType,
    /// Display label of the type.
    pub label: String,
    /// Employees of this type, ordered by unit then id.
    pub employees: Vec<TypedEmployeeReport>,
    /// Sum over `employees`.
    pub totals: TravelTotals,
}

/// Travel rollup grouped by employee type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTypeReport {
    /// Reported period.
    pub period: DateRange,
    /// One group per type, in fixed order, empty groups included.
    pub types: Vec<EmployeeTypeGroup>,
    /// Sum over all group totals.
    pub all_type_total: TravelTotals,
}

/// Professional development caps applied to every employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceCaps {
    /// Spending cap per period.
    pub spending: Decimal,
    /// Days out of office cap per period.
    pub days: i64,
}

/// Usage and remaining professional development allowance of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAllowance {
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Funding on professional development trips.
    pub profdev_requested: Decimal,
    /// Funding on administrative trips.
    pub admin_requested: Decimal,
    /// `profdev_requested + admin_requested`.
    pub total_requested: Decimal,
    /// Expenses paid on professional development trips.
    pub profdev_spent: Decimal,
    /// Expenses paid on administrative trips.
    pub admin_spent: Decimal,
    /// `profdev_spent + admin_spent`.
    pub total_spent: Decimal,
    /// Days out of office on professional development trips.
    pub profdev_days_away: i64,
    /// Days out of office on administrative trips.
    pub admin_days_away: i64,
    /// `profdev_days_away + admin_days_away`.
    pub total_days_away: i64,
    /// Spending cap including any usable extra allocation.
    pub profdev_cap: Decimal,
    /// `profdev_cap - profdev_spent`.
    pub profdev_remaining: Decimal,
    /// Days cap minus `profdev_days_away`.
    pub profdev_days_remaining: i64,
}

impl EmployeeAllowance {
    /// Builds an allowance from usage totals and the applicable caps.
    #[must_use]
    pub fn new(
        employee_id: EmployeeId,
        usage: &TravelTotals,
        cap: Decimal,
        days_cap: i64,
    ) -> Self {
        Self {
            employee_id,
            profdev_requested: usage.profdev_requested,
            admin_requested: usage.admin_requested,
            total_requested: usage.total_requested,
            profdev_spent: usage.profdev_spent,
            admin_spent: usage.admin_spent,
            total_spent: usage.total_spent,
            profdev_days_away: usage.profdev_days_away,
            admin_days_away: usage.admin_days_away,
            total_days_away: usage.total_days_ooo,
            profdev_cap: cap,
            profdev_remaining: cap - usage.profdev_spent,
            profdev_days_remaining: days_cap - usage.profdev_days_away,
        }
    }
}

/// Period figures of a single travel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequestFiscalData {
    /// Travel request ID.
    pub travel_request_id: TravelRequestId,
    /// Expenses paid within the period.
    pub actual_expenses: Decimal,
    /// Funding, if the trip lies within the period.
    pub funding: Decimal,
    /// Days out of office, if not canceled and the trip lies within the period.
    pub days_ooo: i64,
}
