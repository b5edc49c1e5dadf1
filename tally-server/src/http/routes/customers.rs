//! Customer endpoints: the select-box name list and the aggregated table.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{CustomerName, CustomerRepo, CustomerSummary};
use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub query: String,
}

/// GET /customers
async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerName>>, ApiError> {
    let names = CustomerRepo::new(&state.pool).names().await?;
    Ok(Json(names))
}

/// GET /customers/filtered?query=
async fn filtered_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    let rows = CustomerRepo::new(&state.pool)
        .filtered(&params.query)
        .await?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/filtered", get(filtered_customers))
}
