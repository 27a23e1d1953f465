use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/grades", get(handlers::grading::list_grades))
        .route(
            "/api/grades/score/:score",
            get(handlers::grading::grade_for_score),
        )
        .route("/api/behaviors", get(handlers::behaviors::list_behaviors))
        .route("/api/behaviors/:id", get(handlers::behaviors::get_behavior))
        .route(
            "/api/behaviors/:id/phase",
            get(handlers::behaviors::get_expected_phase),
        )
        .route(
            "/api/behaviors/:id/name",
            get(handlers::behaviors::get_display_name),
        )
}
