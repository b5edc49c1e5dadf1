//! Login endpoint wrapping the authenticate action.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::actions::authenticate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login
///
/// 204 on success; 401 with the classified message otherwise.
async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    match authenticate(state.verifier.as_ref(), &form.email, &form.password).await {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(message) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": message })),
        )
            .into_response(),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}
