//! Organizational units.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use terra_shared::types::{EmployeeId, UnitId};

use super::UnknownCode;

/// Unit classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    /// The library as a whole.
    Library,
    /// A division headed by an executive.
    ExecutiveDivision,
    /// A unit run by a manager.
    ManagerialUnit,
}

impl UnitType {
    /// Returns the stored code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Library => "1",
            Self::ExecutiveDivision => "2",
            Self::ManagerialUnit => "3",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::ExecutiveDivision => "Executive Division",
            Self::ManagerialUnit => "Managerial Unit",
        }
    }
}

impl FromStr for UnitType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Library),
            "2" => Ok(Self::ExecutiveDivision),
            "3" => Ok(Self::ManagerialUnit),
            other => Err(UnknownCode::new("unit type", other)),
        }
    }
}

/// A node of the unit tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit ID.
    pub id: UnitId,
    /// Unit name.
    pub name: String,
    /// Unit classification.
    pub unit_type: UnitType,
    /// Employee managing the unit.
    pub manager: Option<EmployeeId>,
    /// Parent unit, `None` for a root.
    pub parent_unit: Option<UnitId>,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
