//! Diagnostic endpoint: dump invoices stored at exactly $6.66.
//!
//! Returns a bare JSON array on success or `{error}` with a 500; kept
//! for parity with the dashboard's scripted exercises.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::db::repos::InvoiceRepo;
use crate::state::AppState;

const DIAGNOSTIC_AMOUNT_CENTS: i32 = 666;

/// GET /query
async fn run_query(State(state): State<Arc<AppState>>) -> Response {
    match InvoiceRepo::new(&state.pool)
        .with_amount(DIAGNOSTIC_AMOUNT_CENTS)
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/query", get(run_query))
}
