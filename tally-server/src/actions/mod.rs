//! Server-side form actions: the write half of the dashboard.
//!
//! Every action runs the same strict sequence: validate, transform,
//! one parameterized write, cache invalidation, then (for create and
//! update) a redirect. The outcome is explicit — an action either
//! redirected the caller or handed back a form state — instead of
//! relying on a redirect making the return value unreachable.

pub mod auth;
pub mod invoices;

pub use auth::authenticate;
pub use invoices::{create_invoice, delete_invoice, update_invoice};

use serde::Serialize;

use crate::models::FieldErrors;

/// The invoice list path whose cached rendering is invalidated after
/// every successful write.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Form state handed back to the client when no redirect happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }
}

/// What an action did: navigated the caller away, or returned state
/// for the form to re-render.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Redirected(&'static str),
    Returned(FormState),
}
