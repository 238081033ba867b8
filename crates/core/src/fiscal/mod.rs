//! Fiscal calendar and report periods.

pub mod calendar;
pub mod error;
pub mod period;

pub use calendar::FiscalCalendar;
pub use error::FiscalError;
pub use period::DateRange;
