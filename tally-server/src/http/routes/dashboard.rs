//! Dashboard endpoints: overview cards, revenue chart, latest invoices.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{CardData, DashboardRepo, InvoiceRepo, LatestInvoice, Revenue, RevenueRepo};
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /dashboard/cards
async fn cards(State(state): State<Arc<AppState>>) -> Result<Json<CardData>, ApiError> {
    let cards = DashboardRepo::new(&state.pool).card_data().await?;
    Ok(Json(cards))
}

/// GET /dashboard/revenue
async fn revenue(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Revenue>>, ApiError> {
    let rows = RevenueRepo::new(&state.pool).list().await?;
    Ok(Json(rows))
}

/// GET /dashboard/latest-invoices
async fn latest_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LatestInvoice>>, ApiError> {
    let rows = InvoiceRepo::new(&state.pool).latest().await?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/cards", get(cards))
        .route("/dashboard/revenue", get(revenue))
        .route("/dashboard/latest-invoices", get(latest_invoices))
}
