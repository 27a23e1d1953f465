use axum::http::StatusCode;
use pawplan_api::middleware::error_handling::{AppError, map_error};
use pawplan_core::errors::PlanError;
use rstest::rstest;

#[rstest]
#[case(PlanError::Configuration("Wake time after bed time".to_string()), StatusCode::BAD_REQUEST)]
#[case(PlanError::Validation("Invalid time".to_string()), StatusCode::BAD_REQUEST)]
#[case(PlanError::NotFound("Behavior not found".to_string()), StatusCode::NOT_FOUND)]
#[case(PlanError::Storage(eyre::eyre!("Store unavailable")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: PlanError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_storage_error() {
    let app_error: AppError = eyre::eyre!("disk full").into();
    assert!(matches!(app_error.0, PlanError::Storage(_)));
}

#[test]
fn test_plan_error_conversion() {
    let app_error: AppError = PlanError::NotFound("Grade".to_string()).into();
    assert!(matches!(app_error.0, PlanError::NotFound(_)));
}
