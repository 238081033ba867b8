//! Organization hierarchy traversal.
//!
//! Both the unit tree and the supervisor chain are walked with a visited set,
//! so malformed data containing cycles still terminates.

pub mod team;
pub mod units;

pub use team::{Team, direct_reports, full_team};
pub use units::{employee_count, employees_in_closure, subunit_closure, super_managers};
