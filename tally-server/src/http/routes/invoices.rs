//! Invoice endpoints: the filtered list, page count, single lookup,
//! and the three form actions.
//!
//! Action responses follow the form contract: a successful create or
//! update answers with a 303 redirect to the invoice list; any
//! returned form state is JSON — 422 when field errors are present,
//! 500 when a database write failed, 200 otherwise (delete's success).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::actions::{self, ActionOutcome, FormState};
use crate::db::repos::{FilteredInvoice, InvoiceDetail, InvoiceRepo};
use crate::http::error::ApiError;
use crate::models::InvoiceForm;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<i64>,
}

/// GET /invoices?query=&page=
async fn list_invoices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<FilteredInvoice>>, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let rows = InvoiceRepo::new(&state.pool)
        .filtered(&params.query, page)
        .await?;
    Ok(Json(rows))
}

/// GET /invoices/pages?query=
async fn invoice_pages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<i64>, ApiError> {
    let pages = InvoiceRepo::new(&state.pool)
        .page_count(&params.query)
        .await?;
    Ok(Json(pages))
}

/// GET /invoices/{id}
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceDetail>, ApiError> {
    let invoice = InvoiceRepo::new(&state.pool).by_id(id).await?;
    Ok(Json(invoice))
}

/// POST /invoices
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let outcome =
        actions::create_invoice(&state.pool, state.revalidator.as_ref(), &form).await;
    outcome_response(outcome)
}

/// POST /invoices/{id}
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceForm>,
) -> Response {
    let outcome =
        actions::update_invoice(&state.pool, state.revalidator.as_ref(), id, &form).await;
    outcome_response(outcome)
}

/// DELETE /invoices/{id}
async fn delete_invoice(State(state): State<Arc<AppState>>, Path(id): Path<Uuid>) -> Response {
    let outcome = actions::delete_invoice(&state.pool, state.revalidator.as_ref(), id).await;
    outcome_response(outcome)
}

fn outcome_response(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Redirected(path) => Redirect::to(path).into_response(),
        ActionOutcome::Returned(state) => {
            let status = form_state_status(&state);
            (status, Json(state)).into_response()
        }
    }
}

fn form_state_status(state: &FormState) -> StatusCode {
    if state.errors.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if state.message.is_some() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/pages", get(invoice_pages))
        .route(
            "/invoices/{id}",
            get(get_invoice).post(update_invoice).delete(delete_invoice),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_state_maps_to_422() {
        let state = FormState {
            errors: Some(crate::models::FieldErrors {
                amount: vec!["Please enter an amount greater than $0.".into()],
                ..Default::default()
            }),
            message: Some("Missing Fields. Failed to Create Invoice.".into()),
        };
        assert_eq!(form_state_status(&state), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn db_failure_state_maps_to_500() {
        let state = FormState::message("Database Error: Failed to Delete Invoice.");
        assert_eq!(form_state_status(&state), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_state_maps_to_200() {
        assert_eq!(form_state_status(&FormState::default()), StatusCode::OK);
    }
}
