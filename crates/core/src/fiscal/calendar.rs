//! Fiscal calendar.
//!
//! A fiscal year is identified by the calendar year in which it ends. With the
//! default July start, FY2019 runs from 2018-07-01 to 2019-06-30.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::FiscalError;
use super::period::DateRange;

/// Month on which the fiscal year starts unless configured otherwise.
pub const DEFAULT_START_MONTH: u32 = 7;

/// Fiscal calendar with an explicit start month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalCalendar {
    start_month: u32,
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        Self {
            start_month: DEFAULT_START_MONTH,
        }
    }
}

impl FiscalCalendar {
    /// Creates a calendar whose fiscal year starts on day 1 of `start_month`.
    pub fn new(start_month: u32) -> Result<Self, FiscalError> {
        if !(1..=12).contains(&start_month) {
            return Err(FiscalError::InvalidStartMonth(start_month));
        }
        Ok(Self { start_month })
    }

    /// Returns the configured start month.
    #[must_use]
    pub const fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns the fiscal year the given date belongs to.
    #[must_use]
    pub fn current_fiscal_year(&self, date: NaiveDate) -> i32 {
        if self.start_month > 1 && date.month() >= self.start_month {
            date.year() + 1
        } else {
            date.year()
        }
    }

    /// Returns the first and last day of a fiscal year.
    pub fn fiscal_year_bounds(&self, fiscal_year: i32) -> Result<DateRange, FiscalError> {
        let out_of_range = || FiscalError::YearOutOfRange(fiscal_year);

        let start_year = if self.start_month == 1 {
            fiscal_year
        } else {
            fiscal_year.checked_sub(1).ok_or_else(out_of_range)?
        };
        let start =
            NaiveDate::from_ymd_opt(start_year, self.start_month, 1).ok_or_else(out_of_range)?;
        let next_start = start_year
            .checked_add(1)
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.start_month, 1))
            .ok_or_else(out_of_range)?;
        let end = next_start.pred_opt().ok_or_else(out_of_range)?;

        Ok(DateRange { start, end })
    }

    /// Returns true if the date belongs to the given fiscal year.
    #[must_use]
    pub fn in_fiscal_year(&self, date: NaiveDate, fiscal_year: i32) -> bool {
        self.current_fiscal_year(date) == fiscal_year
    }

    /// Returns the bounds of the fiscal year containing `today`.
    pub fn current_period(&self, today: NaiveDate) -> Result<DateRange, FiscalError> {
        self.fiscal_year_bounds(self.current_fiscal_year(today))
    }

    /// Resolves optional report dates into a period.
    ///
    /// Both dates given: they must satisfy `end >= start`. Neither given: the
    /// current fiscal year. Exactly one given: rejected.
    pub fn resolve(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateRange, FiscalError> {
        match (start, end) {
            (None, None) => self.current_period(today),
            (Some(start), Some(end)) => DateRange::new(start, end),
            _ => Err(FiscalError::IncompleteRange),
        }
    }

    /// Lists fiscal years from `inception_year` through the current one.
    #[must_use]
    pub fn fiscal_year_list(&self, inception_year: i32, today: NaiveDate) -> Vec<i32> {
        (inception_year..=self.current_fiscal_year(today)).collect()
    }
}
