use axum::{
    Json,
    extract::{Path, Query},
};
use pawplan_core::{
    catalog::catalog,
    errors::PlanError,
    grading::{expected_phase, grade_by_name, normalize_behavior_name},
    models::behavior::{
        BehaviorCategory, BehaviorDefinition, BehaviorListResponse, BehaviorNameResponse,
        ExpectedPhaseResponse,
    },
};
use serde::Deserialize;

use crate::middleware::error_handling::AppError;

#[derive(Debug, Deserialize)]
pub struct BehaviorFilter {
    pub category: Option<BehaviorCategory>,
    /// Only behaviors whose training begins in this grade
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhaseQuery {
    pub grade: String,
}

#[axum::debug_handler]
pub async fn list_behaviors(
    Query(filter): Query<BehaviorFilter>,
) -> Result<Json<BehaviorListResponse>, AppError> {
    let behaviors: Vec<BehaviorDefinition> = match filter.grade.as_deref() {
        Some(grade) => {
            if grade_by_name(grade).is_none() {
                let message = format!("Grade {} not found", grade);
                return Err(AppError(PlanError::NotFound(message)));
            }
            catalog()
                .introduced_at(grade)
                .filter(|def| filter.category.is_none_or(|c| def.category == c))
                .cloned()
                .collect()
        }
        None => match filter.category {
            Some(category) => catalog().by_category(category).cloned().collect(),
            None => catalog().iter().cloned().collect(),
        },
    };

    Ok(Json(BehaviorListResponse { behaviors }))
}

#[axum::debug_handler]
pub async fn get_behavior(Path(id): Path<String>) -> Result<Json<BehaviorDefinition>, AppError> {
    let behavior = catalog()
        .get(&id)
        .ok_or_else(|| PlanError::NotFound(format!("Behavior {} not found", id)))?;

    Ok(Json(behavior.clone()))
}

/// Unknown behaviors report a `null` phase; unknown grades are a 404.
#[axum::debug_handler]
pub async fn get_expected_phase(
    Path(id): Path<String>,
    Query(query): Query<PhaseQuery>,
) -> Result<Json<ExpectedPhaseResponse>, AppError> {
    if grade_by_name(&query.grade).is_none() {
        return Err(AppError(PlanError::NotFound(format!(
            "Grade {} not found",
            query.grade
        ))));
    }

    let phase = expected_phase(&id, &query.grade);

    Ok(Json(ExpectedPhaseResponse {
        behavior_id: id,
        grade: query.grade,
        phase,
    }))
}

pub async fn get_display_name(Path(id): Path<String>) -> Json<BehaviorNameResponse> {
    let name = normalize_behavior_name(&id);
    Json(BehaviorNameResponse {
        behavior_id: id,
        name,
    })
}
