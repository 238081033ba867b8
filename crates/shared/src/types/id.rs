//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `EmployeeId` where a `UnitId` is expected.
//! The wrapped value is the surrogate key assigned by the database.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Creates an ID from a raw database key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw database key.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

typed_id!(UnitId, "Unique identifier for an organizational unit.");
typed_id!(EmployeeId, "Unique identifier for an employee.");
typed_id!(FundId, "Unique identifier for a fund.");
typed_id!(ActivityId, "Unique identifier for a travel activity.");
typed_id!(TravelRequestId, "Unique identifier for a travel request.");
typed_id!(FundingId, "Unique identifier for a funding allocation.");
typed_id!(ActualExpenseId, "Unique identifier for an actual expense.");
typed_id!(VacationId, "Unique identifier for a vacation.");

/// Parses a comma-separated list of IDs, skipping blanks.
///
/// # Errors
///
/// Returns the first part that is not a valid integer.
pub fn parse_id_list<T>(s: &str) -> Result<Vec<T>, String>
where
    T: std::str::FromStr,
{
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<T>().map_err(|_| part.to_string()))
        .collect()
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
