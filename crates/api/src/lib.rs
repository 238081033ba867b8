//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - JSON routes exposing the travel reports
//! - Shared application state
//! - Error responses built from `AppError`

pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use terra_core::fiscal::{FiscalCalendar, FiscalError};
use terra_shared::ReportingConfig;
use terra_shared::types::CurrencyFormat;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Fiscal calendar built from the reporting configuration.
    pub calendar: FiscalCalendar,
    /// Reporting configuration.
    pub reporting: Arc<ReportingConfig>,
    /// Currency display format.
    pub currency: Arc<CurrencyFormat>,
}

impl AppState {
    /// Creates the state, validating the configured fiscal year start month.
    ///
    /// # Errors
    ///
    /// Returns an error if the start month is not a calendar month.
    pub fn new(
        db: DatabaseConnection,
        reporting: ReportingConfig,
        currency: CurrencyFormat,
    ) -> Result<Self, FiscalError> {
        Ok(Self {
            db: Arc::new(db),
            calendar: FiscalCalendar::new(reporting.fiscal_year_start_month)?,
            reporting: Arc::new(reporting),
            currency: Arc::new(currency),
        })
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
