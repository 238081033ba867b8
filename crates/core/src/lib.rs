//! Core business logic for Terra.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, traversal rules, and report calculations live here.
//!
//! # Modules
//!
//! - `fiscal` - Fiscal calendar and report periods
//! - `domain` - Units, employees, funds, and travel records
//! - `store` - Read-only entity store and the in-memory snapshot
//! - `org` - Unit tree and supervisor chain traversal
//! - `reports` - Unit, fund, employee-type, and employee rollup reports

pub mod domain;
pub mod fiscal;
pub mod org;
pub mod reports;
pub mod store;

#[cfg(test)]
mod fixtures;
