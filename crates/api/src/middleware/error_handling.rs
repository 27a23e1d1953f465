//! # Error Handling Middleware
//!
//! Maps PawPlan domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pawplan_core::errors::PlanError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use pawplan_api::middleware::error_handling::AppError;
/// use pawplan_core::{grading::grade_by_name, models::grade::Grade};
///
/// async fn handler(name: String) -> Result<Json<Grade>, AppError> {
///     let grade = grade_by_name(&name)
///         .ok_or_else(|| pawplan_core::errors::PlanError::NotFound(name.clone()))?;
///     Ok(Json(grade.clone()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub PlanError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PlanError::Configuration(_) => StatusCode::BAD_REQUEST,
            PlanError::Validation(_) => StatusCode::BAD_REQUEST,
            PlanError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Lets handlers use `?` on `PlanResult`
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on store calls, reported as storage failures
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PlanError::Storage(err))
    }
}

/// Maps a PlanError directly to an HTTP response
pub fn map_error(err: PlanError) -> Response {
    AppError(err).into_response()
}
