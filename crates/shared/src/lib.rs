//! Shared types, errors, and configuration for Terra.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Currency formatting with an explicit format configuration
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ReportingConfig};
pub use error::AppError;
