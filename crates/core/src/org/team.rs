//! Supervisor chain traversal.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use terra_shared::types::EmployeeId;

use crate::domain::Employee;
use crate::store::TravelStore;

/// Everyone reporting to an employee, directly or indirectly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Team<'a> {
    /// All transitive reports, breadth first.
    pub staff: Vec<&'a Employee>,
    /// Members of `staff` who have reports of their own.
    pub managers: Vec<&'a Employee>,
}

/// Employees whose supervisor is `employee`.
pub fn direct_reports<S>(store: &S, employee: EmployeeId) -> Vec<&Employee>
where
    S: TravelStore + ?Sized,
{
    store.direct_reports(employee)
}

/// Collects the full team below `employee`.
pub fn full_team<S>(store: &S, employee: EmployeeId) -> Team<'_>
where
    S: TravelStore + ?Sized,
{
    let mut visited = HashSet::from([employee]);
    let mut queue = VecDeque::from([employee]);
    let mut team = Team::default();

    while let Some(current) = queue.pop_front() {
        let reports = store.direct_reports(current);
        for report in reports {
            if visited.insert(report.id) {
                team.staff.push(report);
                queue.push_back(report.id);
            }
        }
    }

    team.managers = team
        .staff
        .iter()
        .copied()
        .filter(|e| !store.direct_reports(e.id).is_empty())
        .collect();
    team
}
