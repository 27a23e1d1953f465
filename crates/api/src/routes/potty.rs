use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/potty/schedule", post(handlers::potty::generate_schedule))
        .route(
            "/api/dogs/:dog_id/potty/:date",
            post(handlers::potty::daily_schedule),
        )
        .route(
            "/api/dogs/:dog_id/potty/:date/completions",
            get(handlers::potty::get_completions),
        )
        .route(
            "/api/dogs/:dog_id/potty/:date/completions/:event_id",
            put(handlers::potty::toggle_event),
        )
}
