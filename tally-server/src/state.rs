//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::CredentialVerifier;
use crate::revalidate::Revalidator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub revalidator: Arc<dyn Revalidator>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// State with the default production collaborators: the tracing
    /// revalidator and database-backed credential verification.
    pub fn new(pool: PgPool) -> Self {
        Self {
            revalidator: Arc::new(crate::revalidate::TracingRevalidator),
            verifier: Arc::new(crate::auth::PgCredentialVerifier::new(pool.clone())),
            pool,
        }
    }
}
