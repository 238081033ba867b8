//! Departmental funds.

use serde::{Deserialize, Serialize};
use terra_shared::types::{EmployeeId, FundId, UnitId};

/// A fund travel is charged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    /// Fund ID.
    pub id: FundId,
    /// Account number.
    pub account: String,
    /// Cost center.
    pub cost_center: String,
    /// Fund code.
    pub fund: String,
    /// Employee managing the fund.
    pub manager: EmployeeId,
    /// Unit owning the fund.
    pub unit: Option<UnitId>,
}

impl std::fmt::Display for Fund {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.account, self.cost_center, self.fund)
    }
}
