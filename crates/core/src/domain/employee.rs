//! Employees and their classification.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use terra_shared::types::{EmployeeId, UnitId};

use super::UnknownCode;

/// Employee classification used by the employee-type report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// University Librarian.
    UniversityLibrarian,
    /// Executive.
    Executive,
    /// Unit head.
    UnitHead,
    /// Librarian.
    Librarian,
    /// Senior exempt staff.
    SeniorExempt,
    /// Anyone else.
    Other,
}

impl EmployeeType {
    /// Every type, in report order.
    pub const ALL: [Self; 6] = [
        Self::UniversityLibrarian,
        Self::Executive,
        Self::UnitHead,
        Self::Librarian,
        Self::SeniorExempt,
        Self::Other,
    ];

    /// Returns the stored code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UniversityLibrarian => "ULIB",
            Self::Executive => "EXEC",
            Self::UnitHead => "HEAD",
            Self::Librarian => "LIBR",
            Self::SeniorExempt => "SENR",
            Self::Other => "OTHR",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UniversityLibrarian => "University Librarian",
            Self::Executive => "Executive",
            Self::UnitHead => "Unit Head",
            Self::Librarian => "Librarian",
            Self::SeniorExempt => "Sr. Exempt Staff",
            Self::Other => "Other",
        }
    }
}

impl FromStr for EmployeeType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownCode::new("employee type", s))
    }
}

impl std::fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee ID.
    pub id: EmployeeId,
    /// Full display name.
    pub name: String,
    /// Campus-wide unique identifier.
    pub uid: String,
    /// Unit the employee is assigned to.
    pub unit: UnitId,
    /// Whether the employee is active.
    pub active: bool,
    /// Direct supervisor.
    pub supervisor: Option<EmployeeId>,
    /// Classification.
    pub employee_type: EmployeeType,
    /// Professional development money granted on top of the standard cap.
    pub extra_allocation: Option<Decimal>,
    /// Last day the extra allocation may be used.
    pub allocation_expire_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns the extra allocation still usable on `as_of`.
    ///
    /// An allocation without an expiry date never expires.
    #[must_use]
    pub fn usable_extra_allocation(&self, as_of: NaiveDate) -> Decimal {
        match (self.extra_allocation, self.allocation_expire_date) {
            (Some(amount), None) => amount,
            (Some(amount), Some(expires)) if expires >= as_of => amount,
            _ => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
