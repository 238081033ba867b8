//! Router tests that run without a database.
//!
//! The state holds a disconnected connection, so any request that reaches the
//! snapshot load fails with a database error. Requests rejected earlier never
//! get that far.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Utc};
use http_body_util::BodyExt;
use rstest::rstest;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use terra_api::{AppState, create_router};
use terra_shared::ReportingConfig;
use terra_shared::types::CurrencyFormat;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(
        DatabaseConnection::Disconnected,
        ReportingConfig::default(),
        CurrencyFormat::default(),
    )
    .expect("default start month is valid");
    create_router(state)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_fiscal_years_run_from_inception() {
    let (status, body) = get("/api/v1/fiscal-years").await;
    assert_eq!(status, StatusCode::OK);

    let current = body["current_fiscal_year"].as_i64().unwrap();
    let years: Vec<i64> = body["fiscal_years"]
        .as_array()
        .unwrap()
        .iter()
        .map(|y| y.as_i64().unwrap())
        .collect();
    assert_eq!(years.first(), Some(&2019));
    assert_eq!(years.last(), Some(&current));

    let today = Utc::now().date_naive();
    let expected = if today.month() >= 7 {
        today.year() + 1
    } else {
        today.year()
    };
    assert_eq!(current, i64::from(expected));
    assert_eq!(body["end_date"], format!("{current}-06-30"));
}

#[rstest]
#[case("/api/v1/units/1/report?start_date=2020-01-01&end_date=2019-01-01")]
#[case("/api/v1/units/1/report?end_date=2019-01-01")]
#[case("/api/v1/units/1/report?start_date=2019-01-01")]
#[case("/api/v1/funds/1/report?start_date=2019-01-01")]
#[case("/api/v1/funds/1/travel-requests?end_date=2019-01-01")]
#[case("/api/v1/reports/employee-types?start_date=2020-01-01&end_date=2019-01-01")]
#[case("/api/v1/reports/employees?ids=1,2&start_date=2019-01-01")]
#[case("/api/v1/reports/travel-requests?ids=3&end_date=2019-01-01")]
#[tokio::test]
async fn test_invalid_range_rejected_before_database(#[case] uri: &str) {
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_incomplete_range_message() {
    let (_, body) = get("/api/v1/units/1/report?start_date=2019-01-01").await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("You must include a start and end date or leave both empty")
    );
}

#[rstest]
#[case("/api/v1/reports/employees?ids=1,abc")]
#[case("/api/v1/reports/travel-requests?ids=x")]
#[case("/api/v1/reports/employee-types?employees=2,,z")]
#[tokio::test]
async fn test_malformed_id_list(#[case] uri: &str) {
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[rstest]
#[case("/api/v1/units/1/report?start_date=2019-07-01&end_date=2020-06-30")]
#[case("/api/v1/funds/4/report")]
#[case("/api/v1/units/1")]
#[case("/api/v1/employees/3/team")]
#[tokio::test]
async fn test_database_failure_is_hidden(#[case] uri: &str) {
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATABASE_ERROR");
    assert_eq!(body["message"], "An error occurred");
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let (status, _) = get("/api/v1/funds/1/report?start_date=07/01/2019&end_date=2020-06-30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_invalid_start_month_rejected() {
    let reporting = ReportingConfig {
        fiscal_year_start_month: 13,
        ..ReportingConfig::default()
    };
    let state = AppState::new(
        DatabaseConnection::Disconnected,
        reporting,
        CurrencyFormat::default(),
    );
    assert!(state.is_err());
}
