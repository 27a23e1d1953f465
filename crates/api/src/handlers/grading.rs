use axum::{Json, extract::Path};
use pawplan_core::{
    errors::PlanError,
    grading::{grade_progress, grades},
    models::grade::{GradeListResponse, GradeProgress},
};

use crate::middleware::error_handling::AppError;

pub async fn list_grades() -> Json<GradeListResponse> {
    Json(GradeListResponse {
        grades: grades().to_vec(),
    })
}

#[axum::debug_handler]
pub async fn grade_for_score(Path(score): Path<f64>) -> Result<Json<GradeProgress>, AppError> {
    if !score.is_finite() {
        return Err(AppError(PlanError::Validation(format!(
            "Score must be a finite number, got {}",
            score
        ))));
    }

    Ok(Json(grade_progress(score)))
}
