//! Report error types.

use terra_shared::AppError;
use terra_shared::types::{FundId, UnitId};
use thiserror::Error;

use crate::fiscal::FiscalError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The requested period is incomplete or reversed.
    #[error("Invalid date range: {0}")]
    InvalidDateRange(#[from] FiscalError),

    /// Unit not found.
    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    /// Fund not found.
    #[error("Fund not found: {0}")]
    FundNotFound(FundId),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidDateRange(e) => Self::Validation(e.to_string()),
            ReportError::UnitNotFound(_) | ReportError::FundNotFound(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}
