//! Unit tree traversal.

use std::collections::{HashSet, VecDeque};

use terra_shared::types::UnitId;

use crate::domain::{Employee, Unit};
use crate::store::TravelStore;

/// Returns `root` and every unit below it, breadth first.
///
/// Returns an empty list if `root` does not exist.
pub fn subunit_closure<S>(store: &S, root: UnitId) -> Vec<&Unit>
where
    S: TravelStore + ?Sized,
{
    let Some(root) = store.unit(root) else {
        return Vec::new();
    };

    let mut visited = HashSet::from([root.id]);
    let mut queue = VecDeque::from([root]);
    let mut closure = Vec::new();

    while let Some(unit) = queue.pop_front() {
        closure.push(unit);
        for child in store.subunits(unit.id) {
            if visited.insert(child.id) {
                queue.push_back(child);
            }
        }
    }
    closure
}

/// Employees assigned to any unit in the closure of `root`.
pub fn employees_in_closure<S>(store: &S, root: UnitId) -> Vec<&Employee>
where
    S: TravelStore + ?Sized,
{
    subunit_closure(store, root)
        .into_iter()
        .flat_map(|unit| store.unit_employees(unit.id))
        .collect()
}

/// Number of employees in the closure of `root`.
pub fn employee_count<S>(store: &S, root: UnitId) -> usize
where
    S: TravelStore + ?Sized,
{
    employees_in_closure(store, root).len()
}

/// Managers of `unit` and of each of its ancestors, nearest first.
pub fn super_managers<S>(store: &S, unit: UnitId) -> Vec<&Employee>
where
    S: TravelStore + ?Sized,
{
    let mut visited = HashSet::new();
    let mut seen_managers = HashSet::new();
    let mut managers = Vec::new();
    let mut current = store.unit(unit);

    while let Some(u) = current {
        if !visited.insert(u.id) {
            break;
        }
        if let Some(manager) = u.manager.and_then(|id| store.employee(id))
            && seen_managers.insert(manager.id)
        {
            managers.push(manager);
        }
        current = u.parent_unit.and_then(|parent| store.unit(parent));
    }
    managers
}
