use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{Local, NaiveDate};
use pawplan_core::{
    models::potty::{
        CompletionsResponse, DailyPottyScheduleResponse, GenerateScheduleRequest,
        PottyScheduleResponse, ToggleCompletionResponse,
    },
    potty::generate_for_birth_date,
};
use pawplan_store::completion::{apply_completions, toggle_completion};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn generate_schedule(
    Json(payload): Json<GenerateScheduleRequest>,
) -> Result<Json<PottyScheduleResponse>, AppError> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let config = payload.config.unwrap_or_default();

    let schedule = generate_for_birth_date(&config, payload.birth_date, today)?;

    Ok(Json(PottyScheduleResponse {
        age_months: schedule.age_months,
        max_hold_minutes: schedule.max_hold_minutes,
        events: schedule.events,
    }))
}

/// Schedule for one dog on one day with its stored completion flags applied.
///
/// The dog's age is measured on the requested date; any `today` in the body is ignored.
#[axum::debug_handler]
pub async fn daily_schedule(
    State(state): State<Arc<ApiState>>,
    Path((dog_id, date)): Path<(String, NaiveDate)>,
    Json(payload): Json<GenerateScheduleRequest>,
) -> Result<Json<DailyPottyScheduleResponse>, AppError> {
    let config = payload.config.unwrap_or_default();
    let mut schedule = generate_for_birth_date(&config, payload.birth_date, date)?;

    let completed = state.completions.get(&dog_id, date).await?;
    let completed_count = apply_completions(&mut schedule.events, &completed);

    Ok(Json(DailyPottyScheduleResponse {
        dog_id,
        date,
        age_months: schedule.age_months,
        max_hold_minutes: schedule.max_hold_minutes,
        events: schedule.events,
        completed_count,
    }))
}

#[axum::debug_handler]
pub async fn get_completions(
    State(state): State<Arc<ApiState>>,
    Path((dog_id, date)): Path<(String, NaiveDate)>,
) -> Result<Json<CompletionsResponse>, AppError> {
    let completed = state.completions.get(&dog_id, date).await?;

    Ok(Json(CompletionsResponse {
        dog_id,
        date,
        completed: completed.into_iter().collect(),
    }))
}

#[axum::debug_handler]
pub async fn toggle_event(
    State(state): State<Arc<ApiState>>,
    Path((dog_id, date, event_id)): Path<(String, NaiveDate, String)>,
) -> Result<Json<ToggleCompletionResponse>, AppError> {
    let (completed, completed_ids) =
        toggle_completion(state.completions.as_ref(), &dog_id, date, &event_id).await?;

    Ok(Json(ToggleCompletionResponse {
        event_id,
        completed,
        completed_ids: completed_ids.into_iter().collect(),
    }))
}
