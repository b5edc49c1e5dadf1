//! Seed endpoint.
//!
//! One-shot bootstrap for development databases. Not intended for
//! production; the seed itself is transactional and idempotent.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::db::seed;
use crate::state::AppState;

/// GET /seed
async fn run_seed(State(state): State<Arc<AppState>>) -> Response {
    match seed::run(&state.pool).await {
        Ok(()) => Json(json!({ "message": "Database seeded successfully" })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/seed", get(run_seed))
}
