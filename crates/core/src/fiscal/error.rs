//! Fiscal calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building fiscal calendars and report periods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FiscalError {
    /// Only one of the start and end dates was supplied.
    #[error("You must include a start and end date or leave both empty")]
    IncompleteRange,

    /// The end date falls before the start date.
    #[error("Start date {start} must come before end date {end}")]
    EndBeforeStart {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// The fiscal year cannot be represented as calendar dates.
    #[error("Fiscal year out of range: {0}")]
    YearOutOfRange(i32),

    /// The fiscal year start month is not a calendar month.
    #[error("Invalid fiscal year start month: {0}")]
    InvalidStartMonth(u32),
}
