//! Report period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::FiscalError;

/// An inclusive calendar date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FiscalError> {
        if end < start {
            return Err(FiscalError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Returns true if a trip leaving on `departure` and returning on
    /// `return_date` lies entirely within this range.
    #[must_use]
    pub fn encloses(&self, departure: NaiveDate, return_date: NaiveDate) -> bool {
        departure >= self.start && return_date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
