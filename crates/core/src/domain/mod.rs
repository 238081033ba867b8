//! Domain entities read by the reporting engine.

pub mod employee;
pub mod fund;
pub mod travel;
pub mod unit;

pub use employee::{Employee, EmployeeType};
pub use fund::Fund;
pub use travel::{
    Activity, ActualExpense, ExpenseType, Funding, TravelCategory, TravelRequest, Vacation,
};
pub use unit::{Unit, UnitType};

/// Error returned when a stored code does not map to a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    /// Which enum the code was parsed for.
    pub kind: &'static str,
    /// The offending code.
    pub code: String,
}

impl UnknownCode {
    pub(crate) fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }
}
