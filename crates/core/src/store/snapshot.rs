//! Immutable in-memory travel data.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use terra_shared::types::{
    ActivityId, ActualExpenseId, EmployeeId, FundId, FundingId, TravelRequestId, UnitId,
    VacationId,
};

use super::TravelStore;
use super::error::SnapshotError;
use crate::domain::{
    Activity, ActualExpense, Employee, Fund, Funding, TravelRequest, Unit, Vacation,
};

/// Raw records a [`Snapshot`] is built from.
#[derive(Debug, Clone, Default)]
pub struct SnapshotParts {
    /// Units.
    pub units: Vec<Unit>,
    /// Employees.
    pub employees: Vec<Employee>,
    /// Funds.
    pub funds: Vec<Fund>,
    /// Activities.
    pub activities: Vec<Activity>,
    /// Travel requests.
    pub travel_requests: Vec<TravelRequest>,
    /// Funding allocations.
    pub fundings: Vec<Funding>,
    /// Actual expenses.
    pub expenses: Vec<ActualExpense>,
    /// Vacations.
    pub vacations: Vec<Vacation>,
}

/// Indexed, referentially consistent view of travel data.
///
/// Records are kept in id order and every relation used by the reports has a
/// prebuilt adjacency list, so lookups never scan.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    units: BTreeMap<UnitId, Unit>,
    employees: BTreeMap<EmployeeId, Employee>,
    funds: BTreeMap<FundId, Fund>,
    activities: BTreeMap<ActivityId, Activity>,
    travel_requests: BTreeMap<TravelRequestId, TravelRequest>,
    fundings: BTreeMap<FundingId, Funding>,
    expenses: BTreeMap<ActualExpenseId, ActualExpense>,
    vacations: BTreeMap<VacationId, Vacation>,

    subunits: HashMap<UnitId, Vec<UnitId>>,
    unit_employees: HashMap<UnitId, Vec<EmployeeId>>,
    direct_reports: HashMap<EmployeeId, Vec<EmployeeId>>,
    requests_by_traveler: HashMap<EmployeeId, Vec<TravelRequestId>>,
    fundings_by_request: HashMap<TravelRequestId, Vec<FundingId>>,
    expenses_by_request: HashMap<TravelRequestId, Vec<ActualExpenseId>>,
    vacations_by_request: HashMap<TravelRequestId, Vec<VacationId>>,
    fundings_by_fund: HashMap<FundId, Vec<FundingId>>,
    expenses_by_fund: HashMap<FundId, Vec<ActualExpenseId>>,
}

impl Snapshot {
    /// Indexes the given records.
    ///
    /// # Errors
    ///
    /// Rejects duplicate ids, references to missing records, trips returning
    /// before departure and vacations ending before they start. Cycles in the
    /// unit or supervisor graph are accepted.
    pub fn from_parts(parts: SnapshotParts) -> Result<Self, SnapshotError> {
        let units = index_by_id("unit", parts.units, |u| u.id)?;
        let employees = index_by_id("employee", parts.employees, |e| e.id)?;
        let funds = index_by_id("fund", parts.funds, |f| f.id)?;
        let activities = index_by_id("activity", parts.activities, |a| a.id)?;
        let travel_requests = index_by_id("travel request", parts.travel_requests, |t| t.id)?;
        let fundings = index_by_id("funding", parts.fundings, |f| f.id)?;
        let expenses = index_by_id("actual expense", parts.expenses, |e| e.id)?;
        let vacations = index_by_id("vacation", parts.vacations, |v| v.id)?;

        for unit in units.values() {
            if let Some(parent) = unit.parent_unit {
                require("unit", unit.id, "unit", parent, &units)?;
            }
            if let Some(manager) = unit.manager {
                require("unit", unit.id, "employee", manager, &employees)?;
            }
        }
        for employee in employees.values() {
            require("employee", employee.id, "unit", employee.unit, &units)?;
            if let Some(supervisor) = employee.supervisor {
                require("employee", employee.id, "employee", supervisor, &employees)?;
            }
        }
        for fund in funds.values() {
            require("fund", fund.id, "employee", fund.manager, &employees)?;
            if let Some(unit) = fund.unit {
                require("fund", fund.id, "unit", unit, &units)?;
            }
        }
        for treq in travel_requests.values() {
            require("travel request", treq.id, "employee", treq.traveler, &employees)?;
            require("travel request", treq.id, "activity", treq.activity, &activities)?;
            if let Some(approver) = treq.approved_by {
                require("travel request", treq.id, "employee", approver, &employees)?;
            }
            if treq.return_date < treq.departure_date {
                return Err(SnapshotError::InvalidTravelDates(treq.id.into_inner()));
            }
        }
        for funding in fundings.values() {
            require(
                "funding",
                funding.id,
                "travel request",
                funding.travel_request,
                &travel_requests,
            )?;
            require("funding", funding.id, "fund", funding.fund, &funds)?;
        }
        for expense in expenses.values() {
            require(
                "actual expense",
                expense.id,
                "travel request",
                expense.travel_request,
                &travel_requests,
            )?;
            require("actual expense", expense.id, "fund", expense.fund, &funds)?;
        }
        for vacation in vacations.values() {
            require(
                "vacation",
                vacation.id,
                "travel request",
                vacation.travel_request,
                &travel_requests,
            )?;
            if vacation.end < vacation.start {
                return Err(SnapshotError::InvalidVacationDates(vacation.id.into_inner()));
            }
        }

        Ok(Self {
            subunits: group_by(
                units
                    .values()
                    .filter_map(|u| u.parent_unit.map(|p| (p, u.id))),
            ),
            unit_employees: group_by(employees.values().map(|e| (e.unit, e.id))),
            direct_reports: group_by(
                employees
                    .values()
                    .filter_map(|e| e.supervisor.map(|s| (s, e.id))),
            ),
            requests_by_traveler: group_by(travel_requests.values().map(|t| (t.traveler, t.id))),
            fundings_by_request: group_by(fundings.values().map(|f| (f.travel_request, f.id))),
            expenses_by_request: group_by(expenses.values().map(|e| (e.travel_request, e.id))),
            vacations_by_request: group_by(vacations.values().map(|v| (v.travel_request, v.id))),
            fundings_by_fund: group_by(fundings.values().map(|f| (f.fund, f.id))),
            expenses_by_fund: group_by(expenses.values().map(|e| (e.fund, e.id))),
            units,
            employees,
            funds,
            activities,
            travel_requests,
            fundings,
            expenses,
            vacations,
        })
    }

    /// Number of travel requests held.
    #[must_use]
    pub fn travel_request_count(&self) -> usize {
        self.travel_requests.len()
    }
}

fn index_by_id<K, T>(
    entity: &'static str,
    items: Vec<T>,
    id_of: impl Fn(&T) -> K,
) -> Result<BTreeMap<K, T>, SnapshotError>
where
    K: Ord + Copy + Into<i64>,
{
    let mut index = BTreeMap::new();
    for item in items {
        let id = id_of(&item);
        if index.insert(id, item).is_some() {
            return Err(SnapshotError::DuplicateId {
                entity,
                id: id.into(),
            });
        }
    }
    Ok(index)
}

fn require<I, K, V>(
    entity: &'static str,
    id: I,
    target: &'static str,
    target_id: K,
    index: &BTreeMap<K, V>,
) -> Result<(), SnapshotError>
where
    I: Into<i64>,
    K: Ord + Copy + Into<i64>,
{
    if index.contains_key(&target_id) {
        Ok(())
    } else {
        Err(SnapshotError::DanglingReference {
            entity,
            id: id.into(),
            target,
            target_id: target_id.into(),
        })
    }
}

/// Groups `(parent, child)` pairs. Input arrives in child id order, so each
/// list stays sorted.
fn group_by<P, C>(pairs: impl Iterator<Item = (P, C)>) -> HashMap<P, Vec<C>>
where
    P: Eq + Hash,
{
    let mut groups: HashMap<P, Vec<C>> = HashMap::new();
    for (parent, child) in pairs {
        groups.entry(parent).or_default().push(child);
    }
    groups
}

fn resolve<'a, P, K, V>(
    adjacency: &HashMap<P, Vec<K>>,
    key: &P,
    records: &'a BTreeMap<K, V>,
) -> Vec<&'a V>
where
    P: Eq + Hash,
    K: Ord,
{
    adjacency
        .get(key)
        .map(|ids| ids.iter().filter_map(|id| records.get(id)).collect())
        .unwrap_or_default()
}

impl TravelStore for Snapshot {
    fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    fn subunits(&self, id: UnitId) -> Vec<&Unit> {
        resolve(&self.subunits, &id, &self.units)
    }

    fn unit_employees(&self, id: UnitId) -> Vec<&Employee> {
        resolve(&self.unit_employees, &id, &self.employees)
    }

    fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    fn employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    fn direct_reports(&self, id: EmployeeId) -> Vec<&Employee> {
        resolve(&self.direct_reports, &id, &self.employees)
    }

    fn fund(&self, id: FundId) -> Option<&Fund> {
        self.funds.get(&id)
    }

    fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(&id)
    }

    fn travel_request(&self, id: TravelRequestId) -> Option<&TravelRequest> {
        self.travel_requests.get(&id)
    }

    fn travel_requests_by(&self, traveler: EmployeeId) -> Vec<&TravelRequest> {
        resolve(&self.requests_by_traveler, &traveler, &self.travel_requests)
    }

    fn fundings_for(&self, travel_request: TravelRequestId) -> Vec<&Funding> {
        resolve(&self.fundings_by_request, &travel_request, &self.fundings)
    }

    fn expenses_for(&self, travel_request: TravelRequestId) -> Vec<&ActualExpense> {
        resolve(&self.expenses_by_request, &travel_request, &self.expenses)
    }

    fn vacations_for(&self, travel_request: TravelRequestId) -> Vec<&Vacation> {
        resolve(&self.vacations_by_request, &travel_request, &self.vacations)
    }

    fn fundings_against(&self, fund: FundId) -> Vec<&Funding> {
        resolve(&self.fundings_by_fund, &fund, &self.fundings)
    }

    fn expenses_against(&self, fund: FundId) -> Vec<&ActualExpense> {
        resolve(&self.expenses_by_fund, &fund, &self.expenses)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
