//! `SeaORM` entities for the travel tables.

pub mod activities;
pub mod actual_expenses;
pub mod employees;
pub mod fundings;
pub mod funds;
pub mod travel_requests;
pub mod units;
pub mod vacations;
