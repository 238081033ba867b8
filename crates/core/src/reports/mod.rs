//! Travel report generation.
//!
//! This module computes professional development and administrative travel
//! totals over a [`TravelStore`](crate::store::TravelStore):
//! - Unit report (unit tree rollup)
//! - Fund report (per employee and per travel request)
//! - Employee-type report
//! - Employee allowance report
//! - Travel request period figures

pub mod buckets;
pub mod error;
pub mod service;
pub mod totals;
pub mod types;

#[cfg(test)]
mod tests;

pub use buckets::BucketQuery;
pub use error::ReportError;
pub use service::ReportService;
pub use totals::sum_totals;
pub use types::*;
