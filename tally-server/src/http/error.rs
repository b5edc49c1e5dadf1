//! API error type with automatic HTTP status mapping.
//!
//! Read failures carry a fixed message chosen by the repo; only that
//! message reaches the client. The underlying cause was already logged
//! where it happened.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DataError;

#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Read-side database failure (500, fixed message)
    Data { message: &'static str },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Data { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "internal_error",
                    "message": message
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DataError> for ApiError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::NotFound { resource, id } => Self::NotFound { resource, id },
            DataError::Query { message, .. } => Self::Data { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(DataError::NotFound {
            resource: "invoice",
            id: "abc".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn query_failure_is_500_with_fixed_message() {
        let err = ApiError::from(DataError::Query {
            message: "Failed to fetch invoices.",
            source: sqlx::Error::PoolClosed,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
